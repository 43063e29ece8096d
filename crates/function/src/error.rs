// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::{Diagnostic, Error, Type};

use crate::FunctionId;

/// Diagnostic code carried by a raised error when the caller supplied no
/// code of their own.
pub const UNSPECIFIED_ERROR_CODE: &str = "FUNCTION_000";

/// No kernel is registered for this identifier and argument count. This is
/// the builder's explicit "unsupported" result; the argument list has
/// already been released when it is returned.
pub fn unknown_function(function: FunctionId, arity: usize) -> Error {
	Error(Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("Function '{}' is not defined for {} argument(s)", function, arity),
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and the number of arguments".to_string()),
		notes: vec![],
		cause: None,
	})
}

pub fn arity_mismatch(function: FunctionId, expected: usize, actual: usize) -> Error {
	Error(Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!("Function '{}' expects {} arguments, got {}", function, expected, actual),
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Provide exactly {} arguments", expected)),
		notes: vec![],
		cause: None,
	})
}

pub fn invalid_argument_type(function: FunctionId, index: usize, expected_one_of: Vec<Type>, actual: Type) -> Error {
	let expected = expected_one_of.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");

	Error(Diagnostic {
		code: "FUNCTION_003".to_string(),
		message: format!("Function '{}' argument {} has invalid type", function, index + 1),
		label: Some("invalid argument type".to_string()),
		help: Some(format!("Expected one of: {}, got: {}", expected, actual)),
		notes: vec![],
		cause: None,
	})
}

pub fn out_of_range(function: FunctionId, ty: Type) -> Error {
	Error(Diagnostic {
		code: "FUNCTION_004".to_string(),
		message: format!("Function '{}' result is out of range for {}", function, ty),
		label: Some("out of range".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	})
}

pub fn invalid_length(function: FunctionId, length: i64) -> Error {
	Error(Diagnostic {
		code: "FUNCTION_005".to_string(),
		message: format!("Function '{}' length argument is negative: {}", function, length),
		label: Some("negative length".to_string()),
		help: Some("Provide a non-negative length".to_string()),
		notes: vec![],
		cause: None,
	})
}

/// An error deliberately raised by the user through the raise_error
/// function; code and message are the caller's, passed through verbatim.
pub fn raised_error(code: String, message: String) -> Error {
	Error(Diagnostic {
		code,
		message,
		label: Some("error raised by user".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	})
}
