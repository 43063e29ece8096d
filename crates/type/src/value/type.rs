// SPDX-License-Identifier: MIT
// Copyright (c) 2025 OpalDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All possible data types
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A UTF-8 encoded text
	Utf8,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("boolean"),
			Type::Float4 => f.write_str("float4"),
			Type::Float8 => f.write_str("float8"),
			Type::Int1 => f.write_str("int1"),
			Type::Int2 => f.write_str("int2"),
			Type::Int4 => f.write_str("int4"),
			Type::Int8 => f.write_str("int8"),
			Type::Utf8 => f.write_str("utf8"),
			Type::Undefined => f.write_str("undefined"),
		}
	}
}
