mod automata;
mod cursor;
mod error;
mod token;

use crate::symbol;
use automata::{State, Transition};
use super::{Source, SourcePos};
pub use cursor::Cursor;
pub use error::Error;
#[cfg(test)]
pub use error::ErrorKind;
pub use token::{Keyword, Literal, Operator, Token, TokenKind};


/// The lexer: a byte level automaton that produces tokens on demand. A lexical error
/// doesn't stop the iteration, but the translator stops at the first one.
#[derive(Debug)]
pub struct Lexer<'a, 'b> {
	cursor: Cursor<'a>,
	interner: &'b mut symbol::Interner,
	state: State,
}


impl<'a, 'b> Lexer<'a, 'b> {
	pub fn new(cursor: Cursor<'a>, interner: &'b mut symbol::Interner) -> Self {
		Self { cursor, interner, state: State::Root }
	}
}


impl<'a, 'b> Iterator for Lexer<'a, 'b> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			// Every state must flush its lexeme when visiting the end of the input.
			let eof = self.cursor.peek().is_none();

			let state = std::mem::take(&mut self.state);
			let Transition { state, consume, output } = state.visit(&self.cursor, self.interner);
			self.state = state;

			if consume {
				self.cursor.advance();
			}

			if output.is_some() {
				return output;
			}

			if eof {
				return None;
			}
		}
	}
}
