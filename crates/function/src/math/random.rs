// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opaldb_type::{Result, Value};

use crate::NullaryFunction;

/// Uniform random float in [0, 1). A fresh draw on every call; repeated
/// calls within one row evaluation produce independent values.
pub struct Random;

impl Random {
	pub fn new() -> Self {
		Self
	}
}

impl NullaryFunction for Random {
	fn call(&self) -> Result<Value> {
		Ok(Value::float8(rand::random::<f64>()))
	}
}
