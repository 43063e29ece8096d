// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::{Result, Type, Value};

use crate::{
	FunctionId, UnaryFunction,
	error::{invalid_argument_type, out_of_range},
};

pub struct Abs;

impl Abs {
	pub fn new() -> Self {
		Self
	}
}

impl UnaryFunction for Abs {
	fn call(&self, value: Value) -> Result<Value> {
		match value {
			Value::Int1(v) => v
				.checked_abs()
				.map(Value::int1)
				.ok_or_else(|| out_of_range(FunctionId::Abs, Type::Int1)),
			Value::Int2(v) => v
				.checked_abs()
				.map(Value::int2)
				.ok_or_else(|| out_of_range(FunctionId::Abs, Type::Int2)),
			Value::Int4(v) => v
				.checked_abs()
				.map(Value::int4)
				.ok_or_else(|| out_of_range(FunctionId::Abs, Type::Int4)),
			Value::Int8(v) => v
				.checked_abs()
				.map(Value::int8)
				.ok_or_else(|| out_of_range(FunctionId::Abs, Type::Int8)),
			Value::Float4(v) => Ok(Value::float4(v.value().abs())),
			Value::Float8(v) => Ok(Value::float8(v.value().abs())),
			Value::Undefined => Ok(Value::Undefined),
			other => Err(invalid_argument_type(
				FunctionId::Abs,
				0,
				vec![Type::Int1, Type::Int2, Type::Int4, Type::Int8, Type::Float4, Type::Float8],
				other.get_type(),
			)),
		}
	}
}
