use log::{debug, trace};

use super::{
	quad::{Address, Quads},
	InternalError,
	JumpAttribute,
};


/// A flat list of quadruples whose jump slot is still a placeholder.
///
/// Lists are not `Clone`: merging consumes both inputs and backpatching consumes the
/// list, so each pending quadruple is owned by at most one live list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AddressList(Vec<Address>);


impl AddressList {
	/// The empty list.
	pub fn new() -> Self {
		Self::default()
	}


	/// A list with a single address.
	pub fn single(address: Address) -> Self {
		Self(vec![address])
	}


	/// Concatenate two lists: first `self`, then `other`.
	pub fn merge(mut self, mut other: Self) -> Self {
		self.0.append(&mut other.0);
		self
	}


	pub fn addresses(&self) -> &[Address] {
		&self.0
	}


	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}


impl Quads {
	/// Resolve the placeholder of every quadruple in the list to the given target.
	pub fn backpatch(&mut self, list: AddressList, target: Address) -> Result<(), InternalError> {
		if !list.is_empty() {
			debug!("backpatch {:?} to {}", list.addresses(), target);
		}

		for address in list.0 {
			self.patch(address, 0, target)?;
		}

		Ok(())
	}


	/// Capture the address of the next quadruple, before it exists.
	pub fn marker(&self) -> Address {
		let marker = self.next_address();
		trace!("marker {}", marker);
		marker
	}


	/// `B1 and M B2`: the true path of B1 falls into the code of B2, which starts at the
	/// marker.
	pub fn and(
		&mut self,
		left: JumpAttribute,
		marker: Address,
		right: JumpAttribute,
	) -> Result<JumpAttribute, InternalError> {
		self.backpatch(left.truelist, marker)?;

		Ok(
			JumpAttribute {
				truelist: right.truelist,
				falselist: left.falselist.merge(right.falselist),
			}
		)
	}


	/// `B1 or M B2`: the false path of B1 falls into the code of B2, which starts at the
	/// marker.
	pub fn or(
		&mut self,
		left: JumpAttribute,
		marker: Address,
		right: JumpAttribute,
	) -> Result<JumpAttribute, InternalError> {
		self.backpatch(left.falselist, marker)?;

		Ok(
			JumpAttribute {
				truelist: left.truelist.merge(right.truelist),
				falselist: right.falselist,
			}
		)
	}
}
