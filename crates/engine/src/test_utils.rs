// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use opaldb_type::{Diagnostic, Error, Value};

use crate::expression::{EvaluationContext, Expression, spacer};

/// Counters shared with a [`ProbeExpression`] so tests can assert how
/// often a node was evaluated and that it was dropped exactly once.
pub(crate) struct ProbeCounters {
	pub evaluated: Arc<AtomicUsize>,
	pub dropped: Arc<AtomicUsize>,
}

pub(crate) struct ProbeExpression {
	value: Value,
	fail: bool,
	evaluated: Arc<AtomicUsize>,
	dropped: Arc<AtomicUsize>,
}

pub(crate) fn probe(value: Value, fail: bool) -> (Box<dyn Expression>, ProbeCounters) {
	let evaluated = Arc::new(AtomicUsize::new(0));
	let dropped = Arc::new(AtomicUsize::new(0));
	let counters = ProbeCounters {
		evaluated: evaluated.clone(),
		dropped: dropped.clone(),
	};
	let probe = ProbeExpression {
		value,
		fail,
		evaluated,
		dropped,
	};
	(Box::new(probe), counters)
}

impl Expression for ProbeExpression {
	fn evaluate(&self, _ctx: &EvaluationContext) -> crate::Result<Value> {
		self.evaluated.fetch_add(1, Ordering::SeqCst);
		if self.fail {
			return Err(Error(Diagnostic {
				code: "TEST_001".to_string(),
				message: "probe failure".to_string(),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			}));
		}
		Ok(self.value.clone())
	}

	fn describe(&self, indent: usize) -> String {
		format!("{}Probe", spacer(indent))
	}
}

impl Drop for ProbeExpression {
	fn drop(&mut self) {
		self.dropped.fetch_add(1, Ordering::SeqCst);
	}
}
