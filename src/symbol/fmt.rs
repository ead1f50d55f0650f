use std::fmt::Display as _;

use super::{Interner, Symbol};
use crate::fmt::Display;


/// What an unresolvable symbol renders as.
pub const INVALID: &str = "<invalid symbol>";


impl<'a> Display<'a> for Symbol {
	type Context = &'a Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		if *self == Self::default() {
			INVALID.fmt(f)
		} else {
			context
				.resolve(*self)
				.unwrap_or(INVALID)
				.fmt(f)
		}
	}
}
