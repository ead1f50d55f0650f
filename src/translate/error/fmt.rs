use std::fmt::Display as _;

use super::{Error, Expected, InternalError};
use crate::{
	fmt::Display,
	symbol,
	syntax::lexer::Token,
	term::color,
};


impl<'a> Display<'a> for Expected {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Token(token) => {
				"'".fmt(f)?;
				token.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::Message(msg) => msg.fmt(f),
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Lexer(error) => error.fmt(f),

			Self::UnexpectedEof => "unexpected end of file".fmt(f),

			Self::Unexpected { token: Token { kind, pos }, expected } => {
				write!(f, "{} - unexpected '", pos)?;
				kind.fmt(f, context)?;
				"', expected ".fmt(f)?;
				expected.fmt(f, context)
			}

			Self::UndeclaredVariable { symbol, pos } => {
				write!(f, "{} - undeclared variable '", pos)?;
				color::Fg(color::Yellow, crate::fmt::Show(symbol, context)).fmt(f)?;
				"'".fmt(f)
			}

			Self::DuplicateDeclaration { symbol, pos } => {
				write!(f, "{} - duplicate declaration of '", pos)?;
				color::Fg(color::Yellow, crate::fmt::Show(symbol, context)).fmt(f)?;
				"'".fmt(f)
			}

			Self::NestingTooDeep { pos } => write!(f, "{} - nesting too deep", pos),

			Self::Internal(error) => error.fmt(f),
		}
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		Display::fmt(self, f, &symbol::Interner::new())
	}
}


impl std::fmt::Display for InternalError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::AlreadyResolved { address, previous, target } => write!(
				f,
				"patching quadruple {} to {}, but it already jumps to {}",
				address, target, previous
			),

			Self::OutOfRange { address, next } => write!(
				f,
				"quadruple {} was never emitted, next address is {}",
				address, next
			),

			Self::TargetOutOfRange { address, target } => write!(
				f,
				"patching quadruple {} to {}, which is beyond the next address",
				address, target
			),

			Self::NotAJump { address } => write!(f, "quadruple {} has no jump slot", address),

			Self::NoSuchSlot { address, slot } => {
				write!(f, "quadruple {} has no jump slot number {}", address, slot)
			}

			Self::Unresolved { address } => {
				write!(f, "quadruple {} still has an unresolved jump", address)
			}
		}
	}
}
