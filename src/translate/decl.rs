use std::collections::HashMap;

use super::Error;
use crate::{
	symbol::Symbol,
	syntax::SourcePos,
};


/// The two scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
	Int,
	Real,
}


impl ScalarKind {
	/// The kind of the result of combining the two kinds.
	pub fn join(self, other: Self) -> Self {
		match (self, other) {
			(Self::Int, Self::Int) => Self::Int,
			_ => Self::Real,
		}
	}
}


/// The declaration table: identifier to scalar kind, in declaration order.
#[derive(Debug, Default)]
pub struct Declarations {
	order: Vec<Symbol>,
	kinds: HashMap<Symbol, ScalarKind>,
}


impl Declarations {
	/// Declare a variable. Redeclaration is an error, even with the same kind.
	pub fn declare(&mut self, symbol: Symbol, kind: ScalarKind, pos: SourcePos) -> Result<(), Error> {
		if self.kinds.contains_key(&symbol) {
			return Err(Error::duplicate_declaration(symbol, pos));
		}

		self.kinds.insert(symbol, kind);
		self.order.push(symbol);

		Ok(())
	}


	/// Resolve the kind of a referenced variable.
	pub fn lookup(&self, symbol: Symbol, pos: SourcePos) -> Result<ScalarKind, Error> {
		self.kind_of(symbol)
			.ok_or_else(|| Error::undeclared_variable(symbol, pos))
	}


	pub fn kind_of(&self, symbol: Symbol) -> Option<ScalarKind> {
		self.kinds.get(&symbol).copied()
	}


	/// All declarations, in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (Symbol, ScalarKind)> + '_ {
		self.order
			.iter()
			.filter_map(move |&symbol| self.kind_of(symbol).map(|kind| (symbol, kind)))
	}
}
