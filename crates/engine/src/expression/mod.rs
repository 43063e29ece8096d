// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::Value;

use crate::row::Row;

mod builder;
mod column;
mod constant;
mod function;

pub use builder::build_function_expression;
pub use column::{ColumnExpression, RowSource};
pub use constant::ConstantExpression;
pub use function::{NaryFunctionExpression, NullaryFunctionExpression, UnaryFunctionExpression};

/// The rows an expression is evaluated against: one primary row and, for
/// join evaluation, an optional second one.
pub struct EvaluationContext<'a> {
	pub row: &'a Row,
	pub joined: Option<&'a Row>,
}

/// A node of an expression tree. Nodes are immutable once constructed and
/// never retain the context rows, so one tree may be evaluated from
/// multiple threads at once against distinct rows.
pub trait Expression: Send + Sync {
	/// Evaluate this node against the context rows, evaluating owned
	/// children bottom-up. Failures from children or from the function
	/// kernels propagate unchanged; no failure ever yields a partial
	/// result.
	fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value>;

	/// Indentation-aware rendering of this node and its children, for
	/// diagnostics only.
	fn describe(&self, indent: usize) -> String;
}

impl std::fmt::Debug for dyn Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.describe(0))
	}
}

pub(crate) fn spacer(indent: usize) -> String {
	"  ".repeat(indent)
}
