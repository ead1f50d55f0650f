mod attribute;
mod backpatch;
mod decl;
mod error;
mod expr;
pub mod quad;
mod stmt;
#[cfg(test)]
mod tests;

use std::cell::RefCell;

use log::debug;

use crate::{
	symbol,
	syntax::{
		lexer::{self, Keyword, Lexer, Token, TokenKind},
		Source,
		SourcePos,
	},
};
pub use attribute::{Attribute, JumpAttribute, StatementAttribute};
pub use backpatch::AddressList;
pub use decl::{Declarations, ScalarKind};
pub use error::{Error, InternalError};
#[cfg(test)]
use error::Expected;
use quad::{Address, Quad, Quads, TempPool};


/// How deeply statements and expressions may nest. The translator recurses once per
/// level, so this bounds its stack usage.
const MAX_DEPTH: u32 = 128;


/// A translated compilation unit, ready for an emitter: every quadruple is addressed
/// 1..N without gaps, and every jump is resolved. Jumps may target N + 1, the exit point.
#[derive(Debug)]
pub struct Program {
	pub quads: Box<[Quad]>,
	pub declarations: Declarations,
	pub temporaries: TempPool,
}


impl Program {
	/// The address one past the last quadruple.
	pub fn exit(&self) -> Address {
		Address::FIRST.offset(self.quads.len())
	}


	/// The quadruples paired with their addresses.
	pub fn iter(&self) -> impl Iterator<Item = (Address, &Quad)> + '_ {
		self.quads
			.iter()
			.enumerate()
			.map(|(ix, quad)| (Address::FIRST.offset(ix), quad))
	}
}


/// Translate the given source, failing on the first error.
pub fn compile(source: &Source, interner: &mut symbol::Interner) -> Result<Program, Error> {
	let cursor = lexer::Cursor::from(source);
	let lexer = Lexer::new(cursor, interner);

	// The token stream ends on the first lexical error. Such error takes precedence over
	// whatever the translator makes of the truncated stream, unless the translator failed
	// before reaching it.
	let lexer_error = RefCell::new(None);

	let tokens = lexer.map_while(|result| match result {
		Ok(token) => Some(token),
		Err(error) => {
			*lexer_error.borrow_mut() = Some(error);
			None
		}
	});

	let result = Translator::new(tokens).translate();

	match (result, lexer_error.into_inner()) {
		(Err(error), Some(lexer_error)) if error.pos().map_or(false, |pos| pos < lexer_error.pos) => {
			Err(error)
		}
		(_, Some(lexer_error)) => Err(lexer_error.into()),
		(result, None) => result,
	}
}


/// The translation context: a single left to right pass over the token stream, emitting
/// quadruples and backpatching jumps as each construct is reduced.
#[derive(Debug)]
pub struct Translator<I>
where
	I: Iterator<Item = Token>,
{
	// The lookahead is owned, so that identifiers and literals can be moved out of it.
	cursor: I,
	token: Option<Token>,
	/// The current nesting level.
	depth: u32,
	quads: Quads,
	temporaries: TempPool,
	declarations: Declarations,
}


impl<I> Translator<I>
where
	I: Iterator<Item = Token>,
{
	/// Create a new translator for the given token stream.
	pub fn new(mut cursor: I) -> Self {
		let token = cursor.next();

		Self {
			cursor,
			token,
			depth: 0,
			quads: Quads::new(),
			temporaries: TempPool::default(),
			declarations: Declarations::default(),
		}
	}


	/// Translate the whole token stream.
	pub fn translate(mut self) -> Result<Program, Error> {
		self.translate_declarations()?;

		let program =
			if self.token.is_some() {
				self.translate_statement_list()?
			} else {
				StatementAttribute::default()
			};

		if let Some(token) = self.token.take() {
			return Err(Error::unexpected_msg(token, "';' or end of file"));
		}

		// Falling off the last statement reaches the exit point.
		let exit = self.quads.marker();
		self.quads.backpatch(program.nextlist, exit)?;

		debug!(
			"translated {} quadruples, {} patches, {} temporaries",
			self.quads.len(),
			self.quads.patched().len(),
			self.temporaries.len(),
		);

		Ok(
			Program {
				quads: self.quads.finish()?,
				declarations: self.declarations,
				temporaries: self.temporaries,
			}
		)
	}


	/// Translate the declarations section, which precedes all statements.
	fn translate_declarations(&mut self) -> Result<(), Error> {
		loop {
			let kind = match &self.token {
				Some(Token { kind: TokenKind::Keyword(Keyword::Int), .. }) => ScalarKind::Int,
				Some(Token { kind: TokenKind::Keyword(Keyword::Real), .. }) => ScalarKind::Real,
				_ => return Ok(()),
			};

			self.step();

			loop {
				let (symbol, pos) = self.parse_identifier()?;
				self.declarations.declare(symbol, kind, pos)?;

				if self.peek(&TokenKind::Comma) {
					self.step();
				} else {
					break;
				}
			}

			self.expect(TokenKind::Semicolon)?;
		}
	}


	/// Run a nested translation one level deeper, failing if that's too deep.
	fn nested<T, F>(&mut self, translate: F) -> Result<T, Error>
	where
		F: FnOnce(&mut Self) -> Result<T, Error>,
	{
		if self.depth >= MAX_DEPTH {
			return match &self.token {
				Some(token) => Err(Error::nesting_too_deep(token.pos)),
				None => Err(Error::unexpected_eof()),
			};
		}

		self.depth += 1;
		let result = translate(self);
		self.depth -= 1;

		result
	}


	/// Step the cursor, placing the next token on self.token.
	fn step(&mut self) {
		self.token = self.cursor.next();
	}


	/// Check whether the current token is of the given kind.
	fn peek(&self, kind: &TokenKind) -> bool {
		matches!(&self.token, Some(token) if token.kind == *kind)
	}


	/// Try and eat a token.
	fn eat<F, T>(&mut self, eat: F) -> Result<T, Error>
	where
		F: FnOnce(Token) -> Result<T, (Error, Token)>,
	{
		if let Some(token) = self.token.take() {
			match eat(token) {
				Ok(value) => {
					// Token successfully consumed.
					self.step();
					Ok(value)
				}

				Err((error, token)) => {
					// Fail, rollback the token and produce an error.
					self.token = Some(token);
					Err(error)
				}
			}
		} else {
			Err(Error::unexpected_eof())
		}
	}


	/// Consume the expected token, or produce an error.
	fn expect(&mut self, expected: TokenKind) -> Result<SourcePos, Error> {
		self.eat(|token| match token {
			Token { kind, pos } if kind == expected => Ok(pos),
			token => Err((Error::unexpected(token.clone(), expected), token)),
		})
	}


	/// Consume an identifier.
	fn parse_identifier(&mut self) -> Result<(symbol::Symbol, SourcePos), Error> {
		self.eat(|token| match token {
			Token { kind: TokenKind::Identifier(symbol), pos } => Ok((symbol, pos)),
			token => Err((Error::unexpected_msg(token.clone(), "identifier"), token)),
		})
	}
}
