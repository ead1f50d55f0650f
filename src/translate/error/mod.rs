mod fmt;

use super::quad::Address;
use crate::{
	symbol::Symbol,
	syntax::{lexer::{self, Token, TokenKind}, SourcePos},
};


/// What the translator was expecting when it found an unexpected token.
#[derive(Debug)]
pub enum Expected {
	Token(TokenKind),
	Message(&'static str),
}


/// A user facing translation error. Translation stops at the first one.
#[derive(Debug)]
pub enum Error {
	/// Lexical error in the token stream.
	Lexer(lexer::Error),
	/// Premature EOF.
	UnexpectedEof,
	/// Unexpected token.
	Unexpected { token: Token, expected: Expected },
	/// Variable usage before its declaration.
	UndeclaredVariable { symbol: Symbol, pos: SourcePos },
	/// Variable declared twice.
	DuplicateDeclaration { symbol: Symbol, pos: SourcePos },
	/// Statements or expressions nested beyond the supported depth.
	NestingTooDeep { pos: SourcePos },
	/// The translation scheme itself was violated.
	Internal(InternalError),
}


impl Error {
	/// Create an error signaling unexpected EOF.
	pub fn unexpected_eof() -> Self {
		Self::UnexpectedEof
	}


	/// Create an error signaling an unexpected token, and what was expected.
	pub fn unexpected(token: Token, expected: TokenKind) -> Self {
		Self::Unexpected { token, expected: Expected::Token(expected) }
	}


	/// Create an error signaling an unexpected token, and a message.
	pub fn unexpected_msg(token: Token, message: &'static str) -> Self {
		Self::Unexpected { token, expected: Expected::Message(message) }
	}


	pub fn undeclared_variable(symbol: Symbol, pos: SourcePos) -> Self {
		Self::UndeclaredVariable { symbol, pos }
	}


	pub fn duplicate_declaration(symbol: Symbol, pos: SourcePos) -> Self {
		Self::DuplicateDeclaration { symbol, pos }
	}


	/// Where in the source the error was found, if anywhere.
	pub fn pos(&self) -> Option<SourcePos> {
		match self {
			Self::Lexer(error) => Some(error.pos),
			Self::Unexpected { token, .. } => Some(token.pos),
			Self::UndeclaredVariable { pos, .. }
			| Self::DuplicateDeclaration { pos, .. }
			| Self::NestingTooDeep { pos } => Some(*pos),
			Self::UnexpectedEof | Self::Internal(_) => None,
		}
	}


	pub fn nesting_too_deep(pos: SourcePos) -> Self {
		Self::NestingTooDeep { pos }
	}


	/// Whether this is an internal error rather than a problem in the input.
	pub fn is_internal(&self) -> bool {
		matches!(self, Self::Internal(_))
	}
}


impl From<lexer::Error> for Error {
	fn from(error: lexer::Error) -> Self {
		Self::Lexer(error)
	}
}


impl From<InternalError> for Error {
	fn from(error: InternalError) -> Self {
		Self::Internal(error)
	}
}


impl std::error::Error for Error {}


/// Violations of the backpatching invariants. These are bugs in the translator, never
/// problems in the input program, and are always fatal.
#[derive(Debug, PartialEq, Eq)]
pub enum InternalError {
	/// Patching a slot that already holds a concrete target.
	AlreadyResolved { address: Address, previous: Address, target: Address },
	/// Referencing an address that was never emitted.
	OutOfRange { address: Address, next: Address },
	/// Patching to a target beyond the next address.
	TargetOutOfRange { address: Address, target: Address },
	/// Patching a quadruple that has no jump slot.
	NotAJump { address: Address },
	/// Patching a slot index the quadruple doesn't have.
	NoSuchSlot { address: Address, slot: usize },
	/// A placeholder survived until the end of the translation.
	Unresolved { address: Address },
}


impl InternalError {
	pub fn already_resolved(address: Address, previous: Address, target: Address) -> Self {
		Self::AlreadyResolved { address, previous, target }
	}


	pub fn out_of_range(address: Address, next: Address) -> Self {
		Self::OutOfRange { address, next }
	}


	pub fn target_out_of_range(address: Address, target: Address) -> Self {
		Self::TargetOutOfRange { address, target }
	}


	pub fn not_a_jump(address: Address) -> Self {
		Self::NotAJump { address }
	}


	pub fn no_such_slot(address: Address, slot: usize) -> Self {
		Self::NoSuchSlot { address, slot }
	}


	pub fn unresolved(address: Address) -> Self {
		Self::Unresolved { address }
	}
}


impl std::error::Error for InternalError {}
