use super::{
	quad::{Quad, Slot, Var},
	AddressList,
	Attribute,
	Error,
	StatementAttribute,
	Translator,
};
use crate::{
	symbol::Symbol,
	syntax::{
		lexer::{Keyword, Operator, Token, TokenKind},
		SourcePos,
	},
};


impl<I> Translator<I>
where
	I: Iterator<Item = Token>,
{
	/// Translate a semicolon separated list of statements. The nextlist of each statement
	/// is patched to the first quadruple of the following one.
	pub(super) fn translate_statement_list(&mut self) -> Result<StatementAttribute, Error> {
		let mut list = self.translate_statement()?;

		while self.peek(&TokenKind::Semicolon) {
			self.step();

			// Trailing semicolon.
			if self.token.is_none() || self.peek(&TokenKind::CloseParens) {
				break;
			}

			let marker = self.quads.marker();
			let statement = self.translate_statement()?;

			self.quads.backpatch(list.nextlist, marker)?;
			list = statement;
		}

		Ok(list)
	}


	fn translate_statement(&mut self) -> Result<StatementAttribute, Error> {
		self.nested(Self::translate_single_statement)
	}


	fn translate_single_statement(&mut self) -> Result<StatementAttribute, Error> {
		match self.token.take() {
			// Assignment.
			Some(Token { kind: TokenKind::Identifier(symbol), pos }) => {
				self.step();
				self.translate_assignment(symbol, pos)
			}

			Some(Token { kind: TokenKind::Keyword(Keyword::If), .. }) => {
				self.step();
				self.translate_if()
			}

			Some(Token { kind: TokenKind::Keyword(Keyword::While), .. }) => {
				self.step();
				self.translate_while()
			}

			Some(Token { kind: TokenKind::Keyword(Keyword::Print), .. }) => {
				self.step();
				self.translate_print()
			}

			// Compound statement.
			Some(Token { kind: TokenKind::OpenParens, .. }) => {
				self.step();

				let list = self.translate_statement_list()?;
				self.expect(TokenKind::CloseParens)?;

				Ok(list)
			}

			Some(token) => {
				let error = Error::unexpected_msg(token.clone(), "statement");
				self.token = Some(token);
				Err(error)
			}

			None => Err(Error::unexpected_eof()),
		}
	}


	fn translate_assignment(&mut self, symbol: Symbol, pos: SourcePos) -> Result<StatementAttribute, Error> {
		self.declarations.lookup(symbol, pos)?;
		self.expect(TokenKind::Operator(Operator::Assign))?;

		let target = Var::Named(symbol);

		match self.translate_expression()? {
			Attribute::Value(value) => {
				self.quads.emit(Quad::Copy { target, value });
			}

			Attribute::Jump(jump) => self.materialize(target, jump)?,
		}

		Ok(StatementAttribute::default())
	}


	fn translate_if(&mut self) -> Result<StatementAttribute, Error> {
		let condition = self.translate_expression()?;
		let condition = self.into_jump(condition);

		self.expect(TokenKind::Keyword(Keyword::Then))?;

		let then_marker = self.quads.marker();
		let then_part = self.translate_statement()?;

		if self.peek(&TokenKind::Keyword(Keyword::Else)) {
			// The then part must skip over the else part.
			let skip = AddressList::single(self.quads.emit(Quad::Jump { jump: Slot::Pending }));

			self.step();

			let else_marker = self.quads.marker();
			let else_part = self.translate_statement()?;

			self.quads.backpatch(condition.truelist, then_marker)?;
			self.quads.backpatch(condition.falselist, else_marker)?;

			Ok(
				then_part.nextlist
					.merge(skip)
					.merge(else_part.nextlist)
					.into()
			)
		} else {
			self.quads.backpatch(condition.truelist, then_marker)?;

			Ok(condition.falselist.merge(then_part.nextlist).into())
		}
	}


	fn translate_while(&mut self) -> Result<StatementAttribute, Error> {
		let test = self.quads.marker();

		let condition = self.translate_expression()?;
		let condition = self.into_jump(condition);

		self.expect(TokenKind::Keyword(Keyword::Do))?;

		let body_marker = self.quads.marker();
		let body = self.translate_statement()?;

		self.quads.backpatch(body.nextlist, test)?;
		self.quads.backpatch(condition.truelist, body_marker)?;

		// Back edge.
		self.quads.emit(Quad::Jump { jump: Slot::Resolved(test) });

		Ok(condition.falselist.into())
	}


	fn translate_print(&mut self) -> Result<StatementAttribute, Error> {
		let value = self.translate_expression()?;
		let value = self.into_value(value)?;

		self.quads.emit(Quad::Print { value });

		Ok(StatementAttribute::default())
	}
}
