// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_function::{FunctionId, NaryFunction, NullaryFunction, UnaryFunction};
use opaldb_type::Value;

use crate::expression::{EvaluationContext, Expression, spacer};

/// A function call with no arguments. The kernel reference is resolved out
/// of the registry when the plan is built, so evaluation is a single call
/// with no lookup.
pub struct NullaryFunctionExpression {
	function: FunctionId,
	kernel: &'static dyn NullaryFunction,
}

impl NullaryFunctionExpression {
	pub(crate) fn new(function: FunctionId, kernel: &'static dyn NullaryFunction) -> Self {
		Self {
			function,
			kernel,
		}
	}
}

impl Expression for NullaryFunctionExpression {
	fn evaluate(&self, _ctx: &EvaluationContext) -> crate::Result<Value> {
		self.kernel.call()
	}

	fn describe(&self, indent: usize) -> String {
		format!("{}NullaryFunction {}", spacer(indent), self.function)
	}
}

/// A function call over exactly one owned child expression.
pub struct UnaryFunctionExpression {
	function: FunctionId,
	kernel: &'static dyn UnaryFunction,
	child: Box<dyn Expression>,
}

impl UnaryFunctionExpression {
	pub(crate) fn new(function: FunctionId, kernel: &'static dyn UnaryFunction, child: Box<dyn Expression>) -> Self {
		Self {
			function,
			kernel,
			child,
		}
	}
}

impl Expression for UnaryFunctionExpression {
	fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		// The child is evaluated on every call; results are never cached.
		let value = self.child.evaluate(ctx)?;
		self.kernel.call(value)
	}

	fn describe(&self, indent: usize) -> String {
		let mut out = format!("{}UnaryFunction {}", spacer(indent), self.function);
		out.push('\n');
		out.push_str(&self.child.describe(indent + 1));
		out
	}
}

/// A function call over an ordered list of owned child expressions.
pub struct NaryFunctionExpression {
	function: FunctionId,
	kernel: &'static dyn NaryFunction,
	children: Vec<Box<dyn Expression>>,
}

impl NaryFunctionExpression {
	pub(crate) fn new(
		function: FunctionId,
		kernel: &'static dyn NaryFunction,
		children: Vec<Box<dyn Expression>>,
	) -> Self {
		Self {
			function,
			kernel,
			children,
		}
	}
}

impl Expression for NaryFunctionExpression {
	fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		// Children evaluate left to right; a failure stops the walk and
		// the remaining children are never evaluated.
		let mut values = Vec::with_capacity(self.children.len());
		for child in &self.children {
			values.push(child.evaluate(ctx)?);
		}
		self.kernel.call(values)
	}

	fn describe(&self, indent: usize) -> String {
		let mut out = format!("{}NaryFunction {}", spacer(indent), self.function);
		for child in &self.children {
			out.push('\n');
			out.push_str(&child.describe(indent + 1));
		}
		out
	}
}
