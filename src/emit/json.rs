use serde::{
	ser::{SerializeMap, SerializeStruct},
	Serialize,
	Serializer,
};

use crate::{
	fmt::FmtString,
	symbol,
	translate::{
		quad::{Address, Quad},
		Program,
		ScalarKind,
	},
};


/// A program as a JSON document:
///
/// ```json
/// {
///   "declarations": [ { "name": "a", "kind": "int" } ],
///   "temporaries": [ "t1" ],
///   "quads": [ { "address": 1, "text": "t1 := a + 1" } ]
/// }
/// ```
#[derive(Debug)]
pub struct Json<'a> {
	pub program: &'a Program,
	pub interner: &'a symbol::Interner,
}


impl<'a> Json<'a> {
	pub fn new(program: &'a Program, interner: &'a symbol::Interner) -> Self {
		Self { program, interner }
	}


	/// Render the pretty printed document.
	pub fn render(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}


impl Serialize for Json<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let declarations: Vec<Declaration> = self.program.declarations
			.iter()
			.map(|(symbol, kind)| Declaration { name: symbol.fmt_string(self.interner), kind })
			.collect();

		let temporaries: Vec<String> = self.program.temporaries
			.iter()
			.map(|temp| temp.to_string())
			.collect();

		let quads: Vec<Instruction> = self.program
			.iter()
			.map(|(address, quad)| Instruction { address, quad, interner: self.interner })
			.collect();

		let mut map = serializer.serialize_map(Some(3))?;
		map.serialize_entry("declarations", &declarations)?;
		map.serialize_entry("temporaries", &temporaries)?;
		map.serialize_entry("quads", &quads)?;
		map.end()
	}
}


struct Declaration {
	name: String,
	kind: ScalarKind,
}


impl Serialize for Declaration {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let kind = match self.kind {
			ScalarKind::Int => "int",
			ScalarKind::Real => "real",
		};

		let mut declaration = serializer.serialize_struct("Declaration", 2)?;
		declaration.serialize_field("name", &self.name)?;
		declaration.serialize_field("kind", kind)?;
		declaration.end()
	}
}


struct Instruction<'a> {
	address: Address,
	quad: &'a Quad,
	interner: &'a symbol::Interner,
}


impl Serialize for Instruction<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut instruction = serializer.serialize_struct("Instruction", 2)?;
		instruction.serialize_field("address", &self.address.number())?;
		instruction.serialize_field("text", &self.quad.fmt_string(self.interner))?;
		instruction.end()
	}
}
