// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifies one built-in function. The set is fixed at compile time and
/// the registry binds every identifier to at most one kernel per call
/// shape.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionId {
	Pi,
	Random,
	Abs,
	Upper,
	Lower,
	RaiseError,
	SubstringFrom,
	SubstringFromFor,
}

impl FunctionId {
	pub fn name(&self) -> &'static str {
		match self {
			FunctionId::Pi => "pi",
			FunctionId::Random => "random",
			FunctionId::Abs => "abs",
			FunctionId::Upper => "upper",
			FunctionId::Lower => "lower",
			FunctionId::RaiseError => "raise_error",
			FunctionId::SubstringFrom => "substring_from",
			FunctionId::SubstringFromFor => "substring_from_for",
		}
	}
}

impl Display for FunctionId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
