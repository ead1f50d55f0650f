use super::{Cursor, Error, Literal, Operator, SourcePos, Token, TokenKind};
use crate::symbol;


/// What to do after visiting the character under the cursor.
#[derive(Debug)]
pub(super) struct Transition {
	pub state: State,
	/// Whether the visited character is part of the current lexeme.
	pub consume: bool,
	pub output: Option<Result<Token, Error>>,
}


impl Transition {
	/// Consume the character, without output.
	fn step(state: State) -> Self {
		Self { state, consume: true, output: None }
	}


	/// Leave the character to the next state, without output.
	fn resume(state: State) -> Self {
		Self { state, consume: false, output: None }
	}


	/// Consume the character, which completes the output.
	fn produce(state: State, output: Result<Token, Error>) -> Self {
		Self { state, consume: true, output: Some(output) }
	}


	/// Leave the character to the next state. The output was completed by the previous
	/// character.
	fn resume_produce(state: State, output: Result<Token, Error>) -> Self {
		Self { state, consume: false, output: Some(output) }
	}
}


/// The automaton states. States inside a lexeme keep track of where it started.
#[derive(Debug)]
pub(super) enum State {
	Root,
	/// From `#` to the end of the line.
	Comment,
	Word { start: usize, pos: SourcePos },
	Number { start: usize, pos: SourcePos, phase: Phase },
	/// After a character that may begin a two character symbol.
	Symbol { first: u8, pos: SourcePos },
}


impl Default for State {
	fn default() -> Self {
		Self::Root
	}
}


impl State {
	pub fn visit(self, cursor: &Cursor, interner: &mut symbol::Interner) -> Transition {
		match self {
			Self::Root => root(cursor),
			Self::Comment => comment(cursor),
			Self::Word { start, pos } => word(start, pos, cursor, interner),
			Self::Number { start, pos, phase } => number(start, pos, phase, cursor),
			Self::Symbol { first, pos } => symbol(first, pos, cursor),
		}
	}
}


/// How far into a number literal the automaton is: `123`, `123.45`, `123.45e-6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Phase {
	Integer,
	/// After the dot.
	Dot,
	Fraction,
	/// After the `e`.
	Exponent,
	/// After the sign of the exponent.
	ExponentSign,
	ExponentDigits,
}


impl Phase {
	/// The phase after the given character, if the character belongs in the literal.
	fn next(self, c: u8) -> Option<Self> {
		match (self, c) {
			(Self::Integer, b'0' ..= b'9') => Some(Self::Integer),
			(Self::Dot, b'0' ..= b'9') | (Self::Fraction, b'0' ..= b'9') => Some(Self::Fraction),
			(_, b'0' ..= b'9') => Some(Self::ExponentDigits),

			(Self::Integer, b'.') => Some(Self::Dot),
			(Self::Integer, b'e') | (Self::Fraction, b'e') => Some(Self::Exponent),
			(Self::Exponent, b'+') | (Self::Exponent, b'-') => Some(Self::ExponentSign),

			_ => None,
		}
	}


	/// Whether the literal may end here.
	fn is_complete(self) -> bool {
		matches!(self, Self::Integer | Self::Fraction | Self::ExponentDigits)
	}


	fn is_real(self) -> bool {
		self != Self::Integer
	}
}


fn root(cursor: &Cursor) -> Transition {
	let start = cursor.offset();
	let pos = cursor.pos();

	match cursor.peek() {
		// Eof.
		None => Transition::step(State::Root),

		Some(c) if c.is_ascii_whitespace() => Transition::step(State::Root),

		Some(b'#') => Transition::step(State::Comment),

		Some(c) if c.is_ascii_digit() => {
			Transition::step(State::Number { start, pos, phase: Phase::Integer })
		}

		Some(c) if is_word_start(c) => Transition::step(State::Word { start, pos }),

		Some(first @ b'<') | Some(first @ b'>') | Some(first @ b':') => {
			Transition::step(State::Symbol { first, pos })
		}

		Some(c) => match TokenKind::single(c) {
			Some(kind) => Transition::produce(State::Root, Ok(Token { kind, pos })),
			None => Transition::produce(State::Root, Err(Error::unexpected(c, pos))),
		},
	}
}


fn comment(cursor: &Cursor) -> Transition {
	match cursor.peek() {
		Some(b'\n') | None => Transition::resume(State::Root),
		Some(_) => Transition::step(State::Comment),
	}
}


fn word(start: usize, pos: SourcePos, cursor: &Cursor, interner: &mut symbol::Interner) -> Transition {
	match cursor.peek() {
		Some(c) if is_word(c) => Transition::step(State::Word { start, pos }),

		_ => {
			let lexeme = cursor.lexeme(start);

			let kind = TokenKind::reserved(lexeme).unwrap_or_else(
				// Word characters are ascii, so the conversion is lossless.
				|| TokenKind::Identifier(interner.get_or_intern(String::from_utf8_lossy(lexeme)))
			);

			Transition::resume_produce(State::Root, Ok(Token { kind, pos }))
		}
	}
}


fn number(start: usize, pos: SourcePos, phase: Phase, cursor: &Cursor) -> Transition {
	match cursor.peek().and_then(|c| phase.next(c)) {
		Some(phase) => Transition::step(State::Number { start, pos, phase }),

		None if phase.is_complete() => {
			let literal = parse_number(cursor.lexeme(start), phase.is_real(), pos);
			Transition::resume_produce(State::Root, literal)
		}

		// A dot, an `e` or a sign must be followed by a digit.
		None => {
			let error = match cursor.peek() {
				Some(c) => Error::unexpected(c, cursor.pos()),
				None => Error::unexpected_eof(cursor.pos()),
			};

			Transition::produce(State::Root, Err(error))
		}
	}
}


fn parse_number(lexeme: &[u8], real: bool, pos: SourcePos) -> Result<Token, Error> {
	let invalid = || Error::invalid_number(lexeme, pos);

	let text = std::str::from_utf8(lexeme).map_err(|_| invalid())?;

	let literal =
		if real {
			// Out of range reals parse as infinity, which has no literal form.
			let real: f64 = text.parse().map_err(|_| invalid())?;
			if !real.is_finite() {
				return Err(invalid());
			}

			Literal::Real(real)
		} else {
			// Out of range integers fail here.
			Literal::Int(text.parse().map_err(|_| invalid())?)
		};

	Ok(Token { kind: TokenKind::Literal(literal), pos })
}


fn symbol(first: u8, pos: SourcePos, cursor: &Cursor) -> Transition {
	let operator = |op| Ok(Token { kind: TokenKind::Operator(op), pos });

	match (first, cursor.peek()) {
		(b'<', Some(b'=')) => Transition::produce(State::Root, operator(Operator::LowerEquals)),
		(b'<', Some(b'>')) => Transition::produce(State::Root, operator(Operator::NotEquals)),
		(b'>', Some(b'=')) => Transition::produce(State::Root, operator(Operator::GreaterEquals)),
		(b':', Some(b'=')) => Transition::produce(State::Root, operator(Operator::Assign)),

		(b'<', _) => Transition::resume_produce(State::Root, operator(Operator::Lower)),
		(b'>', _) => Transition::resume_produce(State::Root, operator(Operator::Greater)),

		// A colon is only valid in an assignment.
		(first, _) => Transition::resume_produce(State::Root, Err(Error::unexpected(first, pos))),
	}
}


fn is_word_start(c: u8) -> bool {
	c.is_ascii_alphabetic() || c == b'_'
}


fn is_word(c: u8) -> bool {
	c.is_ascii_alphanumeric() || c == b'_'
}
