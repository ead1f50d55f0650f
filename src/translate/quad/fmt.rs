use std::fmt::Display as _;

use super::{Address, ArithOp, Operand, Quad, RelOp, Slot, Temp, Var};
use crate::{
	fmt::Display,
	symbol,
};


impl std::fmt::Display for Address {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		self.0.fmt(f)
	}
}


impl std::fmt::Display for Slot {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Pending => "_".fmt(f),
			Self::Resolved(address) => address.fmt(f),
		}
	}
}


impl std::fmt::Display for Temp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "t{}", self.number())
	}
}


impl std::fmt::Display for ArithOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Times => "*",
			Self::Div => "/",
			Self::Mod => "mod",
		}
		.fmt(f)
	}
}


impl std::fmt::Display for RelOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Equals => "=",
			Self::NotEquals => "<>",
			Self::Greater => ">",
			Self::GreaterEquals => ">=",
			Self::Lower => "<",
			Self::LowerEquals => "<=",
		}
		.fmt(f)
	}
}


impl<'a> Display<'a> for Var {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Named(symbol) => symbol.fmt(f, context),
			Self::Temp(temp) => temp.fmt(f),
		}
	}
}


impl<'a> Display<'a> for Operand {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Var(var) => var.fmt(f, context),
			Self::Int(int) => int.fmt(f),
			// Debug keeps the decimal point on integral values.
			Self::Real(real) => write!(f, "{:?}", real),
			Self::Bool(true) => "true".fmt(f),
			Self::Bool(false) => "false".fmt(f),
		}
	}
}


impl<'a, J> Display<'a> for Quad<J>
where
	J: std::fmt::Display,
{
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Copy { target, value } => {
				target.fmt(f, context)?;
				" := ".fmt(f)?;
				value.fmt(f, context)
			}

			Self::Binary { target, op, left, right } => {
				target.fmt(f, context)?;
				" := ".fmt(f)?;
				left.fmt(f, context)?;
				write!(f, " {} ", op)?;
				right.fmt(f, context)
			}

			Self::Branch { op, left, right, jump } => {
				"if ".fmt(f)?;
				left.fmt(f, context)?;
				write!(f, " {} ", op)?;
				right.fmt(f, context)?;
				write!(f, " goto {}", jump)
			}

			Self::Jump { jump } => write!(f, "goto {}", jump),

			Self::Print { value } => {
				"print ".fmt(f)?;
				value.fmt(f, context)
			}
		}
	}
}
