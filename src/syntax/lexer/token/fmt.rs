use std::fmt::Display as _;

use super::{Keyword, Literal, Operator, TokenKind};
use crate::{
	fmt::Display,
	symbol,
};


impl std::fmt::Display for Keyword {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Int => "int",
			Self::Real => "real",
			Self::If => "if",
			Self::Then => "then",
			Self::Else => "else",
			Self::While => "while",
			Self::Do => "do",
			Self::Print => "print",
		}
		.fmt(f)
	}
}


impl std::fmt::Display for Literal {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::True => "true".fmt(f),
			Self::False => "false".fmt(f),
			Self::Int(i) => i.fmt(f),
			// Debug keeps the decimal point on integral values.
			Self::Real(r) => write!(f, "{:?}", r),
		}
	}
}


impl std::fmt::Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Times => "*",
			Self::Div => "/",
			Self::Mod => "mod",
			Self::Equals => "=",
			Self::NotEquals => "<>",
			Self::Greater => ">",
			Self::GreaterEquals => ">=",
			Self::Lower => "<",
			Self::LowerEquals => "<=",
			Self::Not => "not",
			Self::And => "and",
			Self::Or => "or",
			Self::Assign => ":=",
		}
		.fmt(f)
	}
}


impl<'a> Display<'a> for TokenKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Identifier(symbol) => symbol.fmt(f, context),
			Self::Keyword(keyword) => keyword.fmt(f),
			Self::Operator(op) => op.fmt(f),
			Self::Literal(literal) => literal.fmt(f),
			Self::Comma => ",".fmt(f),
			Self::Semicolon => ";".fmt(f),
			Self::OpenParens => "(".fmt(f),
			Self::CloseParens => ")".fmt(f),
		}
	}
}
