use super::{Source, SourcePos};


/// A position in the input bytes, tracking the human readable position along.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a [u8],
	offset: usize,
	pos: SourcePos,
}


impl<'a> Cursor<'a> {
	pub fn pos(&self) -> SourcePos {
		self.pos
	}


	pub fn offset(&self) -> usize {
		self.offset
	}


	/// The byte under the cursor, or None at the end of the input.
	pub fn peek(&self) -> Option<u8> {
		self.input.get(self.offset).copied()
	}


	/// The input from the given offset up to the cursor, exclusive.
	pub fn lexeme(&self, start: usize) -> &'a [u8] {
		&self.input[start .. self.offset]
	}


	/// Move past the byte under the cursor. Does nothing at the end of the input.
	pub fn advance(&mut self) {
		if let Some(c) = self.peek() {
			self.pos.visit(c);
			self.offset += 1;
		}
	}
}


impl<'a> From<&'a [u8]> for Cursor<'a> {
	fn from(input: &'a [u8]) -> Self {
		Self { input, offset: 0, pos: SourcePos::default() }
	}
}


impl<'a> From<&'a Source> for Cursor<'a> {
	fn from(source: &'a Source) -> Self {
		Self::from(&*source.contents)
	}
}
