use std::{
	collections::{BTreeSet, HashMap, HashSet},
	fmt::Display as _,
};

use crate::{
	fmt::{Display, FmtString},
	symbol::{self, Symbol},
	translate::{
		quad::{Address, ArithOp, Operand, Quad, RelOp, Temp, Var},
		Program,
		ScalarKind,
	},
};


/// Names that would break the generated code if used as variables: C keywords, plus the
/// functions and macros visible through the included headers.
const RESERVED: &[&str] = &[
	"auto", "break", "case", "char", "const", "continue", "default", "double", "enum",
	"extern", "float", "for", "goto", "inline", "long", "main", "register", "restrict",
	"return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
	"unsigned", "void", "volatile", "fmod", "printf",
	"EOF", "NULL", "stdin", "stdout", "stderr", "INFINITY", "NAN", "HUGE_VAL",
];


/// A program wrapped in a C envelope: a `main` function holding one local per variable
/// and temporary, and one statement per quadruple.
#[derive(Debug)]
pub struct C<'a> {
	program: &'a Program,
	/// The kind of each temporary, inferred from the quadruples that assign it.
	temporaries: HashMap<Temp, ScalarKind>,
	/// Every jump target, which are the only addresses that get a label.
	labels: BTreeSet<Address>,
}


impl<'a> C<'a> {
	pub fn new(program: &'a Program) -> Self {
		let mut c = Self {
			program,
			temporaries: HashMap::new(),
			labels: BTreeSet::new(),
		};

		for (_, quad) in program.iter() {
			if let Some(&target) = quad.jump() {
				c.labels.insert(target);
			}

			let (temp, kind) = match quad {
				Quad::Copy { target: Var::Temp(temp), value } => (*temp, c.kind_of(value)),

				Quad::Binary { target: Var::Temp(temp), left, right, .. } => {
					(*temp, c.kind_of(left).join(c.kind_of(right)))
				}

				_ => continue,
			};

			let entry = c.temporaries.entry(temp).or_insert(kind);
			*entry = entry.join(kind);
		}

		c
	}


	fn kind_of(&self, operand: &Operand) -> ScalarKind {
		match operand {
			Operand::Var(Var::Named(symbol)) => self.program.declarations
				.kind_of(*symbol)
				.unwrap_or(ScalarKind::Int),

			Operand::Var(Var::Temp(temp)) => self.temporaries
				.get(temp)
				.copied()
				.unwrap_or(ScalarKind::Int),

			Operand::Int(_) | Operand::Bool(_) => ScalarKind::Int,

			Operand::Real(_) => ScalarKind::Real,
		}
	}
}


/// Naming of variables in the generated code.
#[derive(Debug, Clone, Copy)]
pub struct Names<'a> {
	interner: &'a symbol::Interner,
	/// The C name of each declared variable whose name is reserved.
	renamed: &'a HashMap<Symbol, String>,
	/// The prefix of temporaries, chosen so that no declared name looks like a temporary.
	temp_prefix: &'a str,
}


impl<'a> Names<'a> {
	fn var(&self, var: &Var) -> String {
		match var {
			Var::Named(symbol) => match self.renamed.get(symbol) {
				Some(name) => name.clone(),
				None => symbol.fmt_string(self.interner),
			},

			Var::Temp(temp) => format!("{}{}", self.temp_prefix, temp.number()),
		}
	}


	fn operand(&self, operand: &Operand) -> String {
		match operand {
			Operand::Var(var) => self.var(var),
			Operand::Int(int) => int.to_string(),
			Operand::Real(real) => format!("{:?}", real),
			Operand::Bool(true) => "1".into(),
			Operand::Bool(false) => "0".into(),
		}
	}
}


/// Append underscores to every reserved declared name, until it is neither reserved nor
/// declared.
fn rename_reserved(program: &Program, interner: &symbol::Interner) -> HashMap<Symbol, String> {
	let declared: HashSet<&str> = program.declarations
		.iter()
		.filter_map(|(symbol, _)| interner.resolve(symbol))
		.collect();

	program.declarations
		.iter()
		.filter_map(|(symbol, _)| interner.resolve(symbol).map(|name| (symbol, name)))
		.filter(|(_, name)| RESERVED.contains(name))
		.map(
			|(symbol, name)| {
				let mut renamed = format!("{}_", name);
				while declared.contains(renamed.as_str()) {
					renamed.push('_');
				}

				(symbol, renamed)
			}
		)
		.collect()
}


/// Prepend underscores to the temporaries prefix until no declared name looks like a
/// temporary.
fn temp_prefix(program: &Program, interner: &symbol::Interner) -> String {
	let mut prefix = String::from("t");

	let clashes = |prefix: &str| {
		program.declarations
			.iter()
			.filter_map(|(symbol, _)| interner.resolve(symbol))
			.any(
				|name| name
					.strip_prefix(prefix)
					.map(|number| !number.is_empty() && number.bytes().all(|c| c.is_ascii_digit()))
					.unwrap_or(false)
			)
	};

	while clashes(&prefix) {
		prefix.insert(0, '_');
	}

	prefix
}


fn c_type(kind: ScalarKind) -> &'static str {
	match kind {
		ScalarKind::Int => "int",
		ScalarKind::Real => "double",
	}
}


fn c_relop(op: RelOp) -> &'static str {
	match op {
		RelOp::Equals => "==",
		RelOp::NotEquals => "!=",
		RelOp::Greater => ">",
		RelOp::GreaterEquals => ">=",
		RelOp::Lower => "<",
		RelOp::LowerEquals => "<=",
	}
}


impl<'a> Display<'a> for C<'_> {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		let temp_prefix = temp_prefix(self.program, context);
		let renamed = rename_reserved(self.program, context);
		let names = Names { interner: context, renamed: &renamed, temp_prefix: &temp_prefix };

		"#include <math.h>\n".fmt(f)?;
		"#include <stdio.h>\n".fmt(f)?;
		"\n".fmt(f)?;
		"int main(void) {\n".fmt(f)?;

		for (symbol, kind) in self.program.declarations.iter() {
			writeln!(f, "\t{} {} = 0;", c_type(kind), names.var(&Var::Named(symbol)))?;
		}

		for temp in self.program.temporaries.iter() {
			let kind = self.temporaries.get(&temp).copied().unwrap_or(ScalarKind::Int);
			writeln!(f, "\t{} {} = 0;", c_type(kind), names.var(&Var::Temp(temp)))?;
		}

		"\n".fmt(f)?;

		for (address, quad) in self.program.iter() {
			if self.labels.contains(&address) {
				writeln!(f, "L{}:", address)?;
			}

			"\t".fmt(f)?;
			self.fmt_quad(quad, names, f)?;
			"\n".fmt(f)?;
		}

		let exit = self.program.exit();
		if self.labels.contains(&exit) {
			writeln!(f, "L{}:", exit)?;
		}

		"\treturn 0;\n".fmt(f)?;
		"}\n".fmt(f)
	}
}


impl<'a> C<'a> {
	fn fmt_quad(&self, quad: &Quad, names: Names, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match quad {
			Quad::Copy { target, value } => {
				write!(f, "{} = {};", names.var(target), names.operand(value))
			}

			Quad::Binary { target, op, left, right } => {
				let target_name = names.var(target);
				let left_name = names.operand(left);
				let right_name = names.operand(right);

				match op {
					ArithOp::Mod if self.kind_of(left).join(self.kind_of(right)) == ScalarKind::Real => {
						write!(f, "{} = fmod({}, {});", target_name, left_name, right_name)
					}

					op => {
						let op = match op {
							ArithOp::Plus => "+",
							ArithOp::Minus => "-",
							ArithOp::Times => "*",
							ArithOp::Div => "/",
							ArithOp::Mod => "%",
						};

						write!(f, "{} = {} {} {};", target_name, left_name, op, right_name)
					}
				}
			}

			Quad::Branch { op, left, right, jump } => write!(
				f,
				"if ({} {} {}) goto L{};",
				names.operand(left),
				c_relop(*op),
				names.operand(right),
				jump
			),

			Quad::Jump { jump } => write!(f, "goto L{};", jump),

			Quad::Print { value } => {
				let format = match self.kind_of(value) {
					ScalarKind::Int => "%d",
					ScalarKind::Real => "%g",
				};

				write!(f, "printf(\"{}\\n\", {});", format, names.operand(value))
			}
		}
	}
}
