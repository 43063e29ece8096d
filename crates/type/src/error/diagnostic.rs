// SPDX-License-Identifier: MIT
// Copyright (c) 2025 OpalDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A structured description of a failure: a stable machine readable code
/// plus the human readable parts a client renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.code)
	}
}

#[cfg(test)]
mod tests {
	use super::Diagnostic;

	#[test]
	fn test_serde_round_trip() {
		let diagnostic = Diagnostic {
			code: "FUNCTION_002".to_string(),
			message: "Function 'abs' expects 1 arguments, got 3".to_string(),
			label: Some("wrong number of arguments".to_string()),
			help: None,
			notes: vec!["note".to_string()],
			cause: None,
		};

		let json = serde_json::to_string(&diagnostic).unwrap();
		let back: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(back, diagnostic);
	}
}
