mod fmt;

use super::SourcePos;
use crate::symbol::Symbol;


/// All keywords in the language, except for operator keywords (and, or, not, mod) and
/// boolean literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	Int,
	Real,
	If,
	Then,
	Else,
	While,
	Do,
	Print,
}


/// Scalar literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
	True,
	False,
	Int(i64),
	Real(f64),
}


/// All operators, including the assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Plus,  // +
	Minus, // -
	Times, // *
	Div,   // /
	Mod,   // mod

	Equals,        // =
	NotEquals,     // <>
	Greater,       // >
	GreaterEquals, // >=
	Lower,         // <
	LowerEquals,   // <=

	Not, // not
	And, // and
	Or,  // or

	Assign, // :=
}


impl Operator {
	/// Additive arithmetic operators (+, -).
	pub fn is_term(&self) -> bool {
		matches!(self, Self::Plus | Self::Minus)
	}


	/// Multiplicative arithmetic operators (*, /, mod).
	pub fn is_factor(&self) -> bool {
		matches!(self, Self::Times | Self::Div | Self::Mod)
	}
}


/// All possible kinds of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	Identifier(Symbol),
	Keyword(Keyword),
	Operator(Operator),
	Literal(Literal),

	Comma,     // ,
	Semicolon, // ;

	OpenParens,  // (
	CloseParens, // )
}


impl TokenKind {
	/// The reserved word with the given spelling, if any. Reserved words are never
	/// identifiers.
	pub fn reserved(word: &[u8]) -> Option<Self> {
		let kind = match word {
			b"int" => Self::Keyword(Keyword::Int),
			b"real" => Self::Keyword(Keyword::Real),
			b"if" => Self::Keyword(Keyword::If),
			b"then" => Self::Keyword(Keyword::Then),
			b"else" => Self::Keyword(Keyword::Else),
			b"while" => Self::Keyword(Keyword::While),
			b"do" => Self::Keyword(Keyword::Do),
			b"print" => Self::Keyword(Keyword::Print),

			b"true" => Self::Literal(Literal::True),
			b"false" => Self::Literal(Literal::False),

			b"not" => Self::Operator(Operator::Not),
			b"and" => Self::Operator(Operator::And),
			b"or" => Self::Operator(Operator::Or),
			b"mod" => Self::Operator(Operator::Mod),

			_ => return None,
		};

		Some(kind)
	}


	/// The token made of a single character, if any. The characters that may begin a two
	/// character symbol (`<`, `>` and `:`) are not included.
	pub fn single(c: u8) -> Option<Self> {
		let kind = match c {
			b'+' => Self::Operator(Operator::Plus),
			b'-' => Self::Operator(Operator::Minus),
			b'*' => Self::Operator(Operator::Times),
			b'/' => Self::Operator(Operator::Div),
			b'=' => Self::Operator(Operator::Equals),
			b',' => Self::Comma,
			b';' => Self::Semicolon,
			b'(' => Self::OpenParens,
			b')' => Self::CloseParens,
			_ => return None,
		};

		Some(kind)
	}
}


/// A lexical token.
#[derive(Debug, Clone)]
pub struct Token {
	pub kind: TokenKind,
	pub pos: SourcePos,
}
