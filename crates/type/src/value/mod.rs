// SPDX-License-Identifier: MIT
// Copyright (c) 2025 OpalDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod ordered_f32;
mod ordered_f64;
mod r#type;

pub use ordered_f32::{NotANumber, OrderedF32};
pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A runtime value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A UTF-8 encoded text
	Utf8(String),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into())
			.map(Value::Float4)
			.unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into())
			.map(Value::Float8)
			.unwrap_or(Value::Undefined)
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Int1(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Utf8(v) => f.write_str(v),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{Type, Value};

	#[test]
	fn test_constructors_and_type() {
		assert_eq!(Value::bool(true).get_type(), Type::Boolean);
		assert_eq!(Value::int1(1i8).get_type(), Type::Int1);
		assert_eq!(Value::int2(1i16).get_type(), Type::Int2);
		assert_eq!(Value::int4(1).get_type(), Type::Int4);
		assert_eq!(Value::int8(1i64).get_type(), Type::Int8);
		assert_eq!(Value::float4(1.0f32).get_type(), Type::Float4);
		assert_eq!(Value::float8(1.0).get_type(), Type::Float8);
		assert_eq!(Value::utf8("a").get_type(), Type::Utf8);
		assert_eq!(Value::undefined().get_type(), Type::Undefined);
	}

	#[test]
	fn test_nan_becomes_undefined() {
		assert!(Value::float4(f32::NAN).is_undefined());
		assert!(Value::float8(f64::NAN).is_undefined());
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::int4(-5).to_string(), "-5");
		assert_eq!(Value::utf8("hello").to_string(), "hello");
		assert_eq!(Value::undefined().to_string(), "undefined");
	}

	#[test]
	fn test_type_predicates() {
		assert!(Type::Int4.is_number());
		assert!(Type::Int4.is_integer());
		assert!(Type::Float8.is_number());
		assert!(Type::Float8.is_floating_point());
		assert!(!Type::Float8.is_integer());
		assert!(Type::Utf8.is_utf8());
		assert!(!Type::Utf8.is_number());
		assert!(!Type::Undefined.is_number());
	}

	#[test]
	fn test_serde_round_trip() {
		let values = vec![
			Value::undefined(),
			Value::bool(false),
			Value::int8(42i64),
			Value::float8(2.5),
			Value::utf8("text"),
		];
		let json = serde_json::to_string(&values).unwrap();
		let back: Vec<Value> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, values);
	}
}
