pub mod fmt;
mod operand;

use log::debug;

use super::InternalError;
pub use operand::{ArithOp, Operand, RelOp, Temp, TempPool, Var};


/// The number of a quadruple in the instruction store. Addresses start at 1 and are
/// never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u32);


impl Address {
	/// The address of the first instruction of a program.
	pub const FIRST: Self = Self(1);


	/// Create an address from its number. Zero is not an address.
	#[cfg(test)]
	pub fn new(number: u32) -> Option<Self> {
		if number == 0 {
			None
		} else {
			Some(Self(number))
		}
	}


	pub fn number(self) -> u32 {
		self.0
	}


	/// The address `count` quadruples after this one.
	pub fn offset(self, count: usize) -> Self {
		Self(self.0 + count as u32)
	}


	/// The index in the store.
	fn index(self) -> usize {
		(self.0 - 1) as usize
	}
}


/// A jump target slot, which may still be a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
	Pending,
	Resolved(Address),
}


/// A quadruple. During translation jump targets are slots (`Quad<Slot>`). A finished
/// program only holds resolved addresses (`Quad<Address>`).
#[derive(Debug, Clone, PartialEq)]
pub enum Quad<J = Address> {
	/// target := value
	Copy {
		target: Var,
		value: Operand,
	},
	/// target := left op right
	Binary {
		target: Var,
		op: ArithOp,
		left: Operand,
		right: Operand,
	},
	/// if left op right goto jump
	Branch {
		op: RelOp,
		left: Operand,
		right: Operand,
		jump: J,
	},
	/// goto jump
	Jump {
		jump: J,
	},
	/// print value
	Print {
		value: Operand,
	},
}


impl<J> Quad<J> {
	/// The jump target, if any.
	pub fn jump(&self) -> Option<&J> {
		match self {
			Self::Branch { jump, .. } | Self::Jump { jump } => Some(jump),
			Self::Copy { .. } | Self::Binary { .. } | Self::Print { .. } => None,
		}
	}


	/// Mutable access to the jump slots. There is at most one.
	fn slots_mut(&mut self) -> &mut [J] {
		match self {
			Self::Branch { jump, .. } | Self::Jump { jump } => std::slice::from_mut(jump),
			Self::Copy { .. } | Self::Binary { .. } | Self::Print { .. } => &mut [],
		}
	}


	/// Convert the jump target, keeping everything else.
	fn try_map_jump<K, E, F>(self, resolve: F) -> Result<Quad<K>, E>
	where
		F: FnOnce(J) -> Result<K, E>,
	{
		Ok(
			match self {
				Self::Copy { target, value } => Quad::Copy { target, value },
				Self::Binary { target, op, left, right } => Quad::Binary { target, op, left, right },
				Self::Branch { op, left, right, jump } => Quad::Branch {
					op,
					left,
					right,
					jump: resolve(jump)?,
				},
				Self::Jump { jump } => Quad::Jump { jump: resolve(jump)? },
				Self::Print { value } => Quad::Print { value },
			}
		)
	}
}


/// The instruction store. Append only: an emitted quadruple keeps its address forever,
/// and only its pending jump slot may change, exactly once.
#[derive(Debug, Default)]
pub struct Quads {
	quads: Vec<Quad<Slot>>,
	/// Every patched address, in patching order.
	patched: Vec<Address>,
}


impl Quads {
	pub fn new() -> Self {
		Self::default()
	}


	/// Append a quadruple, returning its address.
	pub fn emit(&mut self, quad: Quad<Slot>) -> Address {
		let address = self.next_address();
		debug!("emit {}: {:?}", address.number(), quad);
		self.quads.push(quad);
		address
	}


	/// The address the next emitted quadruple will have.
	pub fn next_address(&self) -> Address {
		Address::FIRST.offset(self.quads.len())
	}


	/// Replace a placeholder in an already emitted quadruple with a concrete target.
	pub fn patch(&mut self, address: Address, slot: usize, target: Address) -> Result<(), InternalError> {
		let next = self.next_address();

		if target > next {
			return Err(InternalError::target_out_of_range(address, target));
		}

		let quad = self.quads
			.get_mut(address.index())
			.ok_or_else(|| InternalError::out_of_range(address, next))?;

		let slots = quad.slots_mut();
		if slots.is_empty() {
			return Err(InternalError::not_a_jump(address));
		}

		let jump = slots
			.get_mut(slot)
			.ok_or_else(|| InternalError::no_such_slot(address, slot))?;

		match *jump {
			Slot::Resolved(previous) => Err(InternalError::already_resolved(address, previous, target)),

			Slot::Pending => {
				*jump = Slot::Resolved(target);
				self.patched.push(address);
				Ok(())
			}
		}
	}


	#[cfg(test)]
	pub fn get(&self, address: Address) -> Option<&Quad<Slot>> {
		self.quads.get(address.index())
	}


	pub fn len(&self) -> usize {
		self.quads.len()
	}


	/// The patch history, in patching order.
	pub fn patched(&self) -> &[Address] {
		&self.patched
	}


	/// Addresses of quadruples whose jump slot is still a placeholder.
	#[cfg(test)]
	pub fn pending(&self) -> impl Iterator<Item = Address> + '_ {
		self.quads
			.iter()
			.enumerate()
			.filter(|(_, quad)| matches!(quad.jump(), Some(Slot::Pending)))
			.map(|(ix, _)| Address::FIRST.offset(ix))
	}


	/// Close the store, producing the resolved program. Fails on the first placeholder
	/// that is still pending.
	pub fn finish(self) -> Result<Box<[Quad]>, InternalError> {
		self.quads
			.into_iter()
			.enumerate()
			.map(
				|(ix, quad)| quad.try_map_jump(
					|slot| match slot {
						Slot::Resolved(target) => Ok(target),
						Slot::Pending => Err(InternalError::unresolved(Address::FIRST.offset(ix))),
					}
				)
			)
			.collect()
	}
}
