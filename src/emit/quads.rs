use std::fmt::Display as _;

use crate::{
	fmt::Display,
	symbol,
	translate::Program,
};


/// The numbered listing of a program, one `address: quadruple` line per instruction.
#[derive(Debug)]
pub struct Listing<'a>(pub &'a Program);


impl<'a> Display<'a> for Listing<'_> {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		// Right align the addresses so the quadruples line up.
		let width = self.0.exit().to_string().len();

		for (address, quad) in self.0.iter() {
			write!(f, "{:>width$}: ", address, width = width)?;
			quad.fmt(f, context)?;
			"\n".fmt(f)?;
		}

		Ok(())
	}
}
