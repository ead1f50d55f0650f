use super::{
	backpatch::AddressList,
	quad::Operand,
};


/// The synthesized attribute of an expression. Arithmetic yields a value, while
/// relational and boolean expressions yield jump code.
#[derive(Debug)]
pub enum Attribute {
	Value(Operand),
	Jump(JumpAttribute),
}


/// Jump code: control reaches the truelist or the falselist depending on the truth value
/// of the expression.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct JumpAttribute {
	pub truelist: AddressList,
	pub falselist: AddressList,
}


impl JumpAttribute {
	/// Logical negation swaps the lists, without emitting code.
	pub fn not(self) -> Self {
		Self {
			truelist: self.falselist,
			falselist: self.truelist,
		}
	}
}


/// The synthesized attribute of a statement.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatementAttribute {
	/// Jumps to the quadruple following the statement.
	pub nextlist: AddressList,
}


impl From<AddressList> for StatementAttribute {
	fn from(nextlist: AddressList) -> Self {
		Self { nextlist }
	}
}
