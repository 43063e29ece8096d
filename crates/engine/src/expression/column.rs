// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::Value;

use crate::expression::{EvaluationContext, Expression, spacer};

/// Which of the two context rows a column reference reads from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowSource {
	Primary,
	Joined,
}

/// Positional access into one of the context rows. A position past the end
/// of the row, or a joined source with no joined row present, evaluates to
/// an undefined value.
pub struct ColumnExpression {
	source: RowSource,
	index: usize,
}

impl ColumnExpression {
	pub fn new(source: RowSource, index: usize) -> Self {
		Self {
			source,
			index,
		}
	}
}

impl Expression for ColumnExpression {
	fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		let row = match self.source {
			RowSource::Primary => Some(ctx.row),
			RowSource::Joined => ctx.joined,
		};
		Ok(row.and_then(|row| row.value(self.index)).cloned().unwrap_or(Value::Undefined))
	}

	fn describe(&self, indent: usize) -> String {
		format!("{}Column {:?}[{}]", spacer(indent), self.source, self.index)
	}
}
