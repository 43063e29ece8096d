// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::{Result, Type, Value};

use crate::{
	FunctionId, NaryFunction, UnaryFunction,
	error::{UNSPECIFIED_ERROR_CODE, arity_mismatch, invalid_argument_type, raised_error},
	integer_argument,
};

/// Deliberately raises a query error with a caller supplied code and
/// message, for exercising error paths end to end. An integer code of
/// zero means no error; the input passes through unchanged.
pub struct RaiseError;

impl RaiseError {
	pub fn new() -> Self {
		Self
	}
}

impl UnaryFunction for RaiseError {
	fn call(&self, value: Value) -> Result<Value> {
		let value = match value {
			Value::Utf8(message) => {
				return Err(raised_error(UNSPECIFIED_ERROR_CODE.to_string(), message));
			}
			value => value,
		};
		let Some(code) = integer_argument(FunctionId::RaiseError, 0, &value)? else {
			return Err(raised_error(UNSPECIFIED_ERROR_CODE.to_string(), String::new()));
		};
		if code != 0 {
			return Err(raised_error(code.to_string(), "error code specified by user".to_string()));
		}
		Ok(value)
	}
}

impl NaryFunction for RaiseError {
	fn call(&self, values: Vec<Value>) -> Result<Value> {
		let [code, message] = <[Value; 2]>::try_from(values)
			.map_err(|values| arity_mismatch(FunctionId::RaiseError, 2, values.len()))?;

		// The message is validated before any error is raised.
		let message = match message {
			Value::Utf8(message) => message,
			Value::Undefined => String::new(),
			other => {
				return Err(invalid_argument_type(
					FunctionId::RaiseError,
					1,
					vec![Type::Utf8],
					other.get_type(),
				));
			}
		};

		match integer_argument(FunctionId::RaiseError, 0, &code)? {
			None => Err(raised_error(UNSPECIFIED_ERROR_CODE.to_string(), message)),
			Some(0) => Ok(code),
			Some(value) => Err(raised_error(value.to_string(), message)),
		}
	}
}

#[cfg(test)]
mod tests {
	use opaldb_type::Value;

	use super::RaiseError;
	use crate::{NaryFunction, UnaryFunction, error::UNSPECIFIED_ERROR_CODE};

	#[test]
	fn test_unary_zero_passes_through() {
		let result = UnaryFunction::call(&RaiseError::new(), Value::int4(0)).unwrap();
		assert_eq!(result, Value::int4(0));
	}

	#[test]
	fn test_unary_nonzero_raises_with_code() {
		let err = UnaryFunction::call(&RaiseError::new(), Value::int4(7)).unwrap_err();
		assert_eq!(err.code(), "7");
	}

	#[test]
	fn test_unary_text_raises_with_unspecified_code() {
		let err = UnaryFunction::call(&RaiseError::new(), Value::utf8("boom")).unwrap_err();
		assert_eq!(err.code(), UNSPECIFIED_ERROR_CODE);
		assert_eq!(err.diagnostic().message, "boom");
	}

	#[test]
	fn test_unary_undefined_raises_with_unspecified_code() {
		let err = UnaryFunction::call(&RaiseError::new(), Value::Undefined).unwrap_err();
		assert_eq!(err.code(), UNSPECIFIED_ERROR_CODE);
	}

	#[test]
	fn test_unary_float_is_invalid() {
		let err = UnaryFunction::call(&RaiseError::new(), Value::float8(1.5)).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_003");
	}

	#[test]
	fn test_nary_code_and_message() {
		let err = NaryFunction::call(&RaiseError::new(), vec![Value::int8(7i64), Value::utf8("custom")])
			.unwrap_err();
		assert_eq!(err.code(), "7");
		assert_eq!(err.diagnostic().message, "custom");
	}

	#[test]
	fn test_nary_zero_returns_code_argument() {
		let result = NaryFunction::call(&RaiseError::new(), vec![Value::int8(0i64), Value::utf8("ignored")])
			.unwrap();
		assert_eq!(result, Value::int8(0i64));
	}

	#[test]
	fn test_nary_undefined_code_raises_unspecified() {
		let err = NaryFunction::call(&RaiseError::new(), vec![Value::Undefined, Value::utf8("msg")])
			.unwrap_err();
		assert_eq!(err.code(), UNSPECIFIED_ERROR_CODE);
		assert_eq!(err.diagnostic().message, "msg");
	}

	#[test]
	fn test_nary_undefined_message_is_empty() {
		let err = NaryFunction::call(&RaiseError::new(), vec![Value::int8(3i64), Value::Undefined])
			.unwrap_err();
		assert_eq!(err.code(), "3");
		assert_eq!(err.diagnostic().message, "");
	}

	#[test]
	fn test_nary_non_text_message_is_invalid() {
		// The message type is checked even when the code would raise.
		let err = NaryFunction::call(&RaiseError::new(), vec![Value::int8(7i64), Value::int8(8i64)])
			.unwrap_err();
		assert_eq!(err.code(), "FUNCTION_003");
	}

	#[test]
	fn test_nary_wrong_arity_is_rejected() {
		let err = NaryFunction::call(
			&RaiseError::new(),
			vec![Value::int8(1i64), Value::utf8("a"), Value::utf8("b")],
		)
		.unwrap_err();
		assert_eq!(err.code(), "FUNCTION_002");
	}
}
