// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::{Result, Type, Value};

pub mod diagnostic;
pub mod error;
pub mod math;
pub mod registry;
pub mod text;

mod id;

pub use id::FunctionId;
pub use registry::Functions;

/// A built-in that takes no arguments. The result depends only on
/// evaluation time context, never on a row.
pub trait NullaryFunction: Send + Sync {
	fn call(&self) -> Result<Value>;
}

/// A built-in over a single already evaluated value.
pub trait UnaryFunction: Send + Sync {
	fn call(&self, value: Value) -> Result<Value>;
}

/// A built-in over an ordered list of already evaluated values. The list
/// arrives in the caller's argument order; kernels validate their exact
/// arity themselves.
pub trait NaryFunction: Send + Sync {
	fn call(&self, values: Vec<Value>) -> Result<Value>;
}

/// Coerces an integer argument to i64. Undefined maps to `None`.
pub(crate) fn integer_argument(function: FunctionId, index: usize, value: &Value) -> Result<Option<i64>> {
	match value {
		Value::Int1(v) => Ok(Some(i64::from(*v))),
		Value::Int2(v) => Ok(Some(i64::from(*v))),
		Value::Int4(v) => Ok(Some(i64::from(*v))),
		Value::Int8(v) => Ok(Some(*v)),
		Value::Undefined => Ok(None),
		other => Err(error::invalid_argument_type(
			function,
			index,
			vec![Type::Int1, Type::Int2, Type::Int4, Type::Int8],
			other.get_type(),
		)),
	}
}
