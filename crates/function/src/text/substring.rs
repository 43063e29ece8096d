// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::{Result, Type, Value};

use crate::{
	FunctionId, NaryFunction,
	error::{arity_mismatch, invalid_argument_type, invalid_length},
	integer_argument,
};

/// SUBSTRING(text FROM start): the suffix beginning at a 1-based character
/// position. A start below 1 clamps to the beginning of the string.
pub struct SubstringFrom;

impl SubstringFrom {
	pub fn new() -> Self {
		Self
	}
}

impl NaryFunction for SubstringFrom {
	fn call(&self, values: Vec<Value>) -> Result<Value> {
		let [text, start] = <[Value; 2]>::try_from(values)
			.map_err(|values| arity_mismatch(FunctionId::SubstringFrom, 2, values.len()))?;

		let text = match text {
			Value::Utf8(text) => text,
			Value::Undefined => return Ok(Value::Undefined),
			other => {
				return Err(invalid_argument_type(
					FunctionId::SubstringFrom,
					0,
					vec![Type::Utf8],
					other.get_type(),
				));
			}
		};
		let Some(start) = integer_argument(FunctionId::SubstringFrom, 1, &start)? else {
			return Ok(Value::Undefined);
		};

		let skip = (start.max(1) - 1) as usize;
		Ok(Value::Utf8(text.chars().skip(skip).collect()))
	}
}

/// SUBSTRING(text FROM start FOR length): the characters whose 1-based
/// position falls in [start, start + length), clamped to the string. A
/// negative length is rejected.
pub struct SubstringFromFor;

impl SubstringFromFor {
	pub fn new() -> Self {
		Self
	}
}

impl NaryFunction for SubstringFromFor {
	fn call(&self, values: Vec<Value>) -> Result<Value> {
		let [text, start, length] = <[Value; 3]>::try_from(values)
			.map_err(|values| arity_mismatch(FunctionId::SubstringFromFor, 3, values.len()))?;

		let text = match text {
			Value::Utf8(text) => text,
			Value::Undefined => return Ok(Value::Undefined),
			other => {
				return Err(invalid_argument_type(
					FunctionId::SubstringFromFor,
					0,
					vec![Type::Utf8],
					other.get_type(),
				));
			}
		};
		let Some(start) = integer_argument(FunctionId::SubstringFromFor, 1, &start)? else {
			return Ok(Value::Undefined);
		};
		let Some(length) = integer_argument(FunctionId::SubstringFromFor, 2, &length)? else {
			return Ok(Value::Undefined);
		};
		if length < 0 {
			return Err(invalid_length(FunctionId::SubstringFromFor, length));
		}

		// Window [lo, hi) over 1-based positions; hi may precede lo when
		// the start is far enough below 1.
		let lo = start.max(1);
		let hi = start.saturating_add(length);
		if hi <= lo {
			return Ok(Value::Utf8(String::new()));
		}

		Ok(Value::Utf8(text.chars().skip((lo - 1) as usize).take((hi - lo) as usize).collect()))
	}
}
