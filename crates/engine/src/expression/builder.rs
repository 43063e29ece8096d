// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_function::{FunctionId, Functions, error::unknown_function};
use tracing::instrument;

use crate::expression::{
	Expression, NaryFunctionExpression, NullaryFunctionExpression, UnaryFunctionExpression,
};

/// Turns a parsed function call into an executable expression node.
///
/// Dispatch is by argument count first, then identifier: zero arguments
/// select a nullary kernel, one a unary kernel, two or more an n-ary
/// kernel. On a match the node takes ownership of the argument list; when
/// no kernel is registered for the pair, the list is dropped and an
/// unknown function error is returned. Either way the list is consumed
/// exactly once.
#[instrument(name = "expression::build_function", level = "trace", skip(arguments), fields(arity = arguments.len()))]
pub fn build_function_expression(
	function: FunctionId,
	mut arguments: Vec<Box<dyn Expression>>,
) -> crate::Result<Box<dyn Expression>> {
	let functions = Functions::standard();
	match arguments.len() {
		0 => match functions.get_nullary(function) {
			Some(kernel) => Ok(Box::new(NullaryFunctionExpression::new(function, kernel))),
			None => Err(unknown_function(function, 0)),
		},
		1 => match functions.get_unary(function) {
			Some(kernel) => {
				let child = arguments.pop().expect("arity checked");
				Ok(Box::new(UnaryFunctionExpression::new(function, kernel, child)))
			}
			None => Err(unknown_function(function, 1)),
		},
		arity => match functions.get_nary(function) {
			Some(kernel) => Ok(Box::new(NaryFunctionExpression::new(function, kernel, arguments))),
			None => Err(unknown_function(function, arity)),
		},
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::Ordering;

	use opaldb_function::FunctionId;
	use opaldb_type::Value;

	use super::build_function_expression;
	use crate::test_utils::probe;

	#[test]
	fn test_no_nullary_kernel_is_an_explicit_error() {
		let err = build_function_expression(FunctionId::Abs, vec![]).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_001");
	}

	#[test]
	fn test_no_unary_kernel_releases_the_argument() {
		let (child, counters) = probe(Value::int4(1), false);

		let err = build_function_expression(FunctionId::Pi, vec![child]).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_001");
		assert_eq!(counters.dropped.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_no_nary_kernel_releases_every_argument() {
		let (first, first_counters) = probe(Value::int4(1), false);
		let (second, second_counters) = probe(Value::int4(2), false);
		let (third, third_counters) = probe(Value::int4(3), false);

		let err = build_function_expression(FunctionId::Upper, vec![first, second, third]).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_001");

		assert_eq!(first_counters.dropped.load(Ordering::SeqCst), 1);
		assert_eq!(second_counters.dropped.load(Ordering::SeqCst), 1);
		assert_eq!(third_counters.dropped.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_match_transfers_ownership_without_dropping() {
		let (child, counters) = probe(Value::int4(-5), false);

		let node = build_function_expression(FunctionId::Abs, vec![child]).unwrap();
		assert_eq!(counters.dropped.load(Ordering::SeqCst), 0);

		drop(node);
		assert_eq!(counters.dropped.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_arity_selects_the_kernel_shape() {
		// raise_error is wired for one and for two arguments, not for zero
		assert!(build_function_expression(FunctionId::RaiseError, vec![]).is_err());

		let (one, _) = probe(Value::int4(0), false);
		assert!(build_function_expression(FunctionId::RaiseError, vec![one]).is_ok());

		let (code, _) = probe(Value::int4(0), false);
		let (message, _) = probe(Value::utf8("m"), false);
		assert!(build_function_expression(FunctionId::RaiseError, vec![code, message]).is_ok());
	}
}
