// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{
	FunctionId, NaryFunction, NullaryFunction, UnaryFunction,
	diagnostic::raise::RaiseError,
	math::{abs::Abs, pi::Pi, random::Random},
	text::{
		lower::Lower,
		substring::{SubstringFrom, SubstringFromFor},
		upper::Upper,
	},
};

/// Binds function identifiers to kernels, one table per call shape. An
/// identifier resolves to at most one kernel per shape; lookups happen at
/// plan construction, never per row.
pub struct Functions {
	nullary: HashMap<FunctionId, Box<dyn NullaryFunction>>,
	unary: HashMap<FunctionId, Box<dyn UnaryFunction>>,
	nary: HashMap<FunctionId, Box<dyn NaryFunction>>,
}

impl Functions {
	pub fn new() -> Self {
		Self {
			nullary: HashMap::new(),
			unary: HashMap::new(),
			nary: HashMap::new(),
		}
	}

	/// The standard built-ins, registered once on first use.
	pub fn standard() -> &'static Functions {
		static STANDARD: Lazy<Functions> = Lazy::new(|| {
			let mut functions = Functions::new();
			functions.register_nullary(FunctionId::Pi, Pi::new());
			functions.register_nullary(FunctionId::Random, Random::new());
			functions.register_unary(FunctionId::Abs, Abs::new());
			functions.register_unary(FunctionId::Upper, Upper::new());
			functions.register_unary(FunctionId::Lower, Lower::new());
			functions.register_unary(FunctionId::RaiseError, RaiseError::new());
			functions.register_nary(FunctionId::SubstringFrom, SubstringFrom::new());
			functions.register_nary(FunctionId::SubstringFromFor, SubstringFromFor::new());
			functions.register_nary(FunctionId::RaiseError, RaiseError::new());
			functions
		});
		&STANDARD
	}

	pub fn get_nullary(&self, function: FunctionId) -> Option<&dyn NullaryFunction> {
		self.nullary.get(&function).map(|kernel| kernel.as_ref())
	}

	pub fn register_nullary<F>(&mut self, function: FunctionId, kernel: F)
	where
		F: NullaryFunction + 'static,
	{
		self.nullary.insert(function, Box::new(kernel));
	}

	pub fn get_unary(&self, function: FunctionId) -> Option<&dyn UnaryFunction> {
		self.unary.get(&function).map(|kernel| kernel.as_ref())
	}

	pub fn register_unary<F>(&mut self, function: FunctionId, kernel: F)
	where
		F: UnaryFunction + 'static,
	{
		self.unary.insert(function, Box::new(kernel));
	}

	pub fn get_nary(&self, function: FunctionId) -> Option<&dyn NaryFunction> {
		self.nary.get(&function).map(|kernel| kernel.as_ref())
	}

	pub fn register_nary<F>(&mut self, function: FunctionId, kernel: F)
	where
		F: NaryFunction + 'static,
	{
		self.nary.insert(function, Box::new(kernel));
	}
}
