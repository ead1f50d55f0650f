use crate::{
	symbol::Symbol,
	syntax::lexer::Operator,
};


/// A compiler generated temporary, rendered as `t1`, `t2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Temp(u32);


impl Temp {
	/// The number of the temporary, starting at 1.
	pub fn number(self) -> u32 {
		self.0
	}
}


/// The pool of temporaries of a compilation unit. It only grows: temporaries are never
/// reused.
#[derive(Debug, Default)]
pub struct TempPool {
	count: u32,
}


impl TempPool {
	/// Allocate a fresh temporary.
	pub fn allocate(&mut self) -> Temp {
		self.count += 1;
		Temp(self.count)
	}


	/// How many temporaries have been allocated.
	pub fn len(&self) -> usize {
		self.count as usize
	}


	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.count == 0
	}


	/// All allocated temporaries, in allocation order.
	pub fn iter(&self) -> impl Iterator<Item = Temp> {
		(1 ..= self.count).map(Temp)
	}
}


/// A storage location: either a declared variable or a temporary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
	Named(Symbol),
	Temp(Temp),
}


/// The place of a value: where it lives at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
	Var(Var),
	Int(i64),
	Real(f64),
	Bool(bool),
}


impl From<Var> for Operand {
	fn from(var: Var) -> Self {
		Self::Var(var)
	}
}


impl From<Temp> for Operand {
	fn from(temp: Temp) -> Self {
		Self::Var(Var::Temp(temp))
	}
}


/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
	Plus,  // +
	Minus, // -
	Times, // *
	Div,   // /
	Mod,   // mod
}


impl ArithOp {
	pub fn from_operator(op: Operator) -> Option<Self> {
		match op {
			Operator::Plus => Some(Self::Plus),
			Operator::Minus => Some(Self::Minus),
			Operator::Times => Some(Self::Times),
			Operator::Div => Some(Self::Div),
			Operator::Mod => Some(Self::Mod),

			Operator::Equals
			| Operator::NotEquals
			| Operator::Greater
			| Operator::GreaterEquals
			| Operator::Lower
			| Operator::LowerEquals
			| Operator::Not
			| Operator::And
			| Operator::Or
			| Operator::Assign => None,
		}
	}
}


/// Relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
	Equals,        // =
	NotEquals,     // <>
	Greater,       // >
	GreaterEquals, // >=
	Lower,         // <
	LowerEquals,   // <=
}


impl RelOp {
	pub fn from_operator(op: Operator) -> Option<Self> {
		match op {
			Operator::Equals => Some(Self::Equals),
			Operator::NotEquals => Some(Self::NotEquals),
			Operator::Greater => Some(Self::Greater),
			Operator::GreaterEquals => Some(Self::GreaterEquals),
			Operator::Lower => Some(Self::Lower),
			Operator::LowerEquals => Some(Self::LowerEquals),

			Operator::Plus
			| Operator::Minus
			| Operator::Times
			| Operator::Div
			| Operator::Mod
			| Operator::Not
			| Operator::And
			| Operator::Or
			| Operator::Assign => None,
		}
	}
}
