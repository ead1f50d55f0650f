use super::{
	quad::{Address, ArithOp, Operand, Quad, Quads, RelOp, Slot, Var},
	AddressList,
	Attribute,
	Error,
	InternalError,
	JumpAttribute,
	Translator,
};
use crate::syntax::lexer::{Literal, Operator, Token, TokenKind};


impl<I> Translator<I>
where
	I: Iterator<Item = Token>,
{
	/// Translate a single expression.
	pub(super) fn translate_expression(&mut self) -> Result<Attribute, Error> {
		let translate_and = move |translator: &mut Self| {
			translator.translate_logical(Operator::And, Self::translate_not, Quads::and)
		};

		self.nested(|translator| translator.translate_logical(Operator::Or, translate_and, Quads::or))
	}


	/// Translate a chain of short circuit operators. Both operands are coerced to jump
	/// code, and the left one before the marker is captured.
	fn translate_logical<P, C>(
		&mut self,
		operator: Operator,
		mut translate_operand: P,
		mut combine: C,
	) -> Result<Attribute, Error>
	where
		P: FnMut(&mut Self) -> Result<Attribute, Error>,
		C: FnMut(&mut Quads, JumpAttribute, Address, JumpAttribute) -> Result<JumpAttribute, InternalError>,
	{
		let mut attribute = translate_operand(self)?;

		while self.peek(&TokenKind::Operator(operator)) {
			let left = self.into_jump(attribute);
			self.step();

			let marker = self.quads.marker();
			let right = translate_operand(self)?;
			let right = self.into_jump(right);

			attribute = Attribute::Jump(combine(&mut self.quads, left, marker, right)?);
		}

		Ok(attribute)
	}


	fn translate_not(&mut self) -> Result<Attribute, Error> {
		if self.peek(&TokenKind::Operator(Operator::Not)) {
			self.step();

			let operand = self.nested(Self::translate_not)?;

			Ok(Attribute::Jump(self.into_jump(operand).not()))
		} else {
			self.translate_relational()
		}
	}


	/// Translate an arithmetic expression, optionally compared to a second one.
	fn translate_relational(&mut self) -> Result<Attribute, Error> {
		let left = self.translate_arith()?;

		match self.peek_operator().and_then(RelOp::from_operator) {
			Some(op) => {
				let left = self.into_value(left)?;
				self.step();

				let right = self.translate_arith()?;
				let right = self.into_value(right)?;

				Ok(Attribute::Jump(self.relational(op, left, right)))
			}

			None => Ok(left),
		}
	}


	fn translate_arith(&mut self) -> Result<Attribute, Error> {
		let translate_term =
			move |translator: &mut Self| translator.translate_binop(Self::translate_unary, Operator::is_factor);

		self.translate_binop(translate_term, Operator::is_term)
	}


	/// Translate a left associative chain of arithmetic operators. Each operator stores
	/// its result in a fresh temporary.
	fn translate_binop<P, F>(&mut self, mut translate_operand: P, check: F) -> Result<Attribute, Error>
	where
		P: FnMut(&mut Self) -> Result<Attribute, Error>,
		F: Fn(&Operator) -> bool,
	{
		let mut attribute = translate_operand(self)?;

		while let Some(op) = self.peek_operator().filter(&check).and_then(ArithOp::from_operator) {
			let left = self.into_value(attribute)?;
			self.step();

			let right = translate_operand(self)?;
			let right = self.into_value(right)?;

			let target = self.temporaries.allocate();
			self.quads.emit(Quad::Binary { target: Var::Temp(target), op, left, right });

			attribute = Attribute::Value(target.into());
		}

		Ok(attribute)
	}


	fn translate_unary(&mut self) -> Result<Attribute, Error> {
		if self.peek(&TokenKind::Operator(Operator::Minus)) {
			self.step();

			let operand = self.nested(Self::translate_unary)?;
			let operand = self.into_value(operand)?;

			Ok(Attribute::Value(self.negate(operand)))
		} else {
			self.translate_primary()
		}
	}


	fn translate_primary(&mut self) -> Result<Attribute, Error> {
		match self.token.take() {
			// Variable.
			Some(Token { kind: TokenKind::Identifier(symbol), pos }) => {
				self.step();

				self.declarations.lookup(symbol, pos)?;

				Ok(Attribute::Value(Var::Named(symbol).into()))
			}

			// Literal.
			Some(Token { kind: TokenKind::Literal(literal), .. }) => {
				self.step();

				let operand = match literal {
					Literal::True => Operand::Bool(true),
					Literal::False => Operand::Bool(false),
					Literal::Int(int) => Operand::Int(int),
					Literal::Real(real) => Operand::Real(real),
				};

				Ok(Attribute::Value(operand))
			}

			// Parenthesis: no code, the attribute passes through.
			Some(Token { kind: TokenKind::OpenParens, .. }) => {
				self.step();

				let attribute = self.translate_expression()?;
				self.expect(TokenKind::CloseParens)?;

				Ok(attribute)
			}

			Some(token) => {
				let error = Error::unexpected_msg(token.clone(), "expression");
				self.token = Some(token);
				Err(error)
			}

			None => Err(Error::unexpected_eof()),
		}
	}


	/// The operator under the cursor, if any.
	fn peek_operator(&self) -> Option<Operator> {
		match &self.token {
			Some(Token { kind: TokenKind::Operator(op), .. }) => Some(*op),
			_ => None,
		}
	}


	/// Emit the test of a relational expression: `if left op right goto _` at `a`, then
	/// `goto _` at `a + 1`.
	fn relational(&mut self, op: RelOp, left: Operand, right: Operand) -> JumpAttribute {
		let branch = self.quads.emit(Quad::Branch { op, left, right, jump: Slot::Pending });
		let jump = self.quads.emit(Quad::Jump { jump: Slot::Pending });

		JumpAttribute {
			truelist: AddressList::single(branch),
			falselist: AddressList::single(jump),
		}
	}


	/// Negate a value. Literals are folded, anything else is subtracted from zero.
	fn negate(&mut self, operand: Operand) -> Operand {
		match operand {
			Operand::Int(int) => Operand::Int(int.wrapping_neg()),
			Operand::Real(real) => Operand::Real(-real),

			operand => {
				let target = self.temporaries.allocate();

				self.quads.emit(
					Quad::Binary {
						target: Var::Temp(target),
						op: ArithOp::Minus,
						left: Operand::Int(0),
						right: operand,
					}
				);

				target.into()
			}
		}
	}


	/// Coerce an attribute to a value place. Jump code is materialized into a fresh
	/// temporary.
	pub(super) fn into_value(&mut self, attribute: Attribute) -> Result<Operand, Error> {
		match attribute {
			Attribute::Value(operand) => Ok(operand),

			Attribute::Jump(jump) => {
				let target = self.temporaries.allocate();
				self.materialize(Var::Temp(target), jump)?;
				Ok(target.into())
			}
		}
	}


	/// Coerce an attribute to jump code. Boolean literals become a single unconditional
	/// jump, other values are tested against zero.
	pub(super) fn into_jump(&mut self, attribute: Attribute) -> JumpAttribute {
		match attribute {
			Attribute::Jump(jump) => jump,

			Attribute::Value(Operand::Bool(value)) => {
				let jump = AddressList::single(self.quads.emit(Quad::Jump { jump: Slot::Pending }));

				if value {
					JumpAttribute { truelist: jump, falselist: AddressList::new() }
				} else {
					JumpAttribute { truelist: AddressList::new(), falselist: jump }
				}
			}

			Attribute::Value(operand) => self.relational(RelOp::NotEquals, operand, Operand::Int(0)),
		}
	}


	/// Store the truth value of jump code in a variable:
	///
	/// ```text
	/// target := true
	/// goto join
	/// target := false
	/// join:
	/// ```
	pub(super) fn materialize(&mut self, target: Var, jump: JumpAttribute) -> Result<(), InternalError> {
		let on_true = self.quads.marker();
		self.quads.emit(Quad::Copy { target, value: Operand::Bool(true) });
		let skip = self.quads.emit(Quad::Jump { jump: Slot::Pending });

		let on_false = self.quads.marker();
		self.quads.emit(Quad::Copy { target, value: Operand::Bool(false) });

		self.quads.backpatch(jump.truelist, on_true)?;
		self.quads.backpatch(jump.falselist, on_false)?;

		let join = self.quads.marker();
		self.quads.patch(skip, 0, join)
	}
}
