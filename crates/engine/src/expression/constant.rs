// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::Value;

use crate::expression::{EvaluationContext, Expression, spacer};

/// A literal leaf holding one value; ignores the input rows.
pub struct ConstantExpression {
	value: Value,
}

impl ConstantExpression {
	pub fn new(value: Value) -> Self {
		Self {
			value,
		}
	}
}

impl Expression for ConstantExpression {
	fn evaluate(&self, _ctx: &EvaluationContext) -> crate::Result<Value> {
		Ok(self.value.clone())
	}

	fn describe(&self, indent: usize) -> String {
		format!("{}Constant {}", spacer(indent), self.value)
	}
}
