mod errors;

use std::{io, path::Path};

use assert_matches::assert_matches;

use super::*;
use crate::{fmt::FmtString, tests};


fn source(input: &str) -> Source {
	Source {
		path: Path::new("<test>").into(),
		contents: input.as_bytes().into(),
	}
}


/// The text form of every quadruple, in address order.
fn listing(program: &Program, interner: &symbol::Interner) -> Vec<String> {
	program
		.iter()
		.map(|(_, quad)| quad.fmt_string(interner))
		.collect()
}


/// Compile the input, which must be valid, into its listing.
fn translate(input: &str) -> Vec<String> {
	let mut interner = symbol::Interner::new();
	let program = compile(&source(input), &mut interner).expect("valid program");
	listing(&program, &interner)
}


/// A translator over the tokens of the input, which must be lexically valid.
fn translator(input: &str, interner: &mut symbol::Interner) -> Translator<std::vec::IntoIter<Token>> {
	let cursor = lexer::Cursor::from(input.as_bytes());
	let tokens: Vec<Token> = Lexer::new(cursor, interner)
		.collect::<Result<_, _>>()
		.expect("valid tokens");

	Translator::new(tokens.into_iter())
}


fn address(number: u32) -> Address {
	Address::new(number).expect("nonzero address")
}


#[test]
fn test_if_without_else() {
	assert_eq!(
		translate("int a, b; if (a < b) then (print a)"),
		[
			"if a < b goto 3",
			"goto 4",
			"print a",
		]
	);
}


#[test]
fn test_if_else() {
	assert_eq!(
		translate("int a, b, x; if a < b then x := 1 else x := 2"),
		[
			"if a < b goto 3",
			"goto 5",
			"x := 1",
			"goto 6",
			"x := 2",
		]
	);
}


#[test]
fn test_dangling_else_binds_to_nearest_if() {
	assert_eq!(
		translate("int a, b; if a < b then if b < a then print 1 else print 2"),
		[
			"if a < b goto 3",
			"goto 8",
			"if b < a goto 5",
			"goto 7",
			"print 1",
			"goto 8",
			"print 2",
		]
	);
}


#[test]
fn test_while_back_edge() {
	assert_eq!(
		translate("int a, b; while (a < b) do (a := a - 1)"),
		[
			"if a < b goto 3",
			"goto 6",
			"t1 := a - 1",
			"a := t1",
			"goto 1",
		]
	);
}


#[test]
fn test_boolean_coercion() {
	let listing = translate("int a, b, x; x := (a < b)");

	assert_eq!(
		listing,
		[
			"if a < b goto 3",
			"goto 5",
			"x := true",
			"goto 6",
			"x := false",
		]
	);

	// Both paths assign x.
	assert_eq!(listing.iter().filter(|quad| quad.starts_with("x := ")).count(), 2);
}


#[test]
fn test_boolean_coercion_into_temporary() {
	assert_eq!(
		translate("int a, b; print (a < b) + 1"),
		[
			"if a < b goto 3",
			"goto 5",
			"t1 := true",
			"goto 6",
			"t1 := false",
			"t2 := t1 + 1",
			"print t2",
		]
	);
}


#[test]
fn test_value_as_condition() {
	assert_eq!(
		translate("int a; while a do a := a - 1"),
		[
			"if a <> 0 goto 3",
			"goto 6",
			"t1 := a - 1",
			"a := t1",
			"goto 1",
		]
	);
}


#[test]
fn test_boolean_literals() {
	assert_eq!(
		translate("int x; x := true; if false then print 1; if true then print 2"),
		[
			"x := true",
			"goto 4",
			"print 1",
			"goto 5",
			"print 2",
		]
	);
}


#[test]
fn test_arithmetic() {
	assert_eq!(
		translate("int a, b, c, d, x; x := a - b - c * d mod 2"),
		[
			"t1 := a - b",
			"t2 := c * d",
			"t3 := t2 mod 2",
			"t4 := t1 - t3",
			"x := t4",
		]
	);
}


#[test]
fn test_unary_minus() {
	assert_eq!(
		translate("int a; real x; x := -a + -3 * -(1.5)"),
		[
			"t1 := 0 - a",
			"t2 := -3 * -1.5",
			"t3 := t1 + t2",
			"x := t3",
		]
	);
}


#[test]
fn test_statement_lists() {
	assert_eq!(
		translate("int a, b; a := 1; (b := 2; print b;); print a;"),
		[
			"a := 1",
			"b := 2",
			"print b",
			"print a",
		]
	);
}


#[test]
fn test_empty_program() {
	let mut interner = symbol::Interner::new();
	let program = compile(&source("int a; real b, c;"), &mut interner).expect("valid program");

	assert!(program.quads.is_empty());
	assert_eq!(program.exit(), Address::FIRST);
	assert!(program.temporaries.is_empty());

	let declarations: Vec<(Option<&str>, ScalarKind)> = program.declarations
		.iter()
		.map(|(symbol, kind)| (interner.resolve(symbol), kind))
		.collect();

	assert_eq!(
		declarations,
		[
			(Some("a"), ScalarKind::Int),
			(Some("b"), ScalarKind::Real),
			(Some("c"), ScalarKind::Real),
		]
	);
}


#[test]
fn test_and_short_circuit() {
	let mut interner = symbol::Interner::new();
	let mut translator = translator("int a, b, c, d; a < b and c < d", &mut interner);

	translator.translate_declarations().expect("valid declarations");
	let attribute = translator.translate_expression().expect("valid expression");

	assert_matches!(
		attribute,
		Attribute::Jump(JumpAttribute { truelist, falselist }) => {
			assert_eq!(truelist.addresses(), [address(3)]);
			assert_eq!(falselist.addresses(), [address(2), address(4)]);
		}
	);

	// The true path of the left operand enters the right operand.
	assert_matches!(
		translator.quads.get(address(1)),
		Some(Quad::Branch { jump: quad::Slot::Resolved(target), .. }) if *target == address(3)
	);
}


#[test]
fn test_or_short_circuit() {
	let mut interner = symbol::Interner::new();
	let mut translator = translator("int a, b, c, d; a < b or not c < d", &mut interner);

	translator.translate_declarations().expect("valid declarations");
	let attribute = translator.translate_expression().expect("valid expression");

	assert_matches!(
		attribute,
		Attribute::Jump(JumpAttribute { truelist, falselist }) => {
			assert_eq!(truelist.addresses(), [address(1), address(4)]);
			assert_eq!(falselist.addresses(), [address(3)]);
		}
	);

	// The false path of the left operand enters the right operand.
	assert_matches!(
		translator.quads.get(address(2)),
		Some(Quad::Jump { jump: quad::Slot::Resolved(target) }) if *target == address(3)
	);
}


#[test]
fn test_parenthesis_pass_through() {
	let mut interner = symbol::Interner::new();
	let mut translator = translator("int a, b; ((a < b))", &mut interner);

	translator.translate_declarations().expect("valid declarations");
	let attribute = translator.translate_expression().expect("valid expression");

	assert_matches!(
		attribute,
		Attribute::Jump(JumpAttribute { truelist, falselist }) => {
			assert_eq!(truelist.addresses(), [address(1)]);
			assert_eq!(falselist.addresses(), [address(2)]);
		}
	);

	assert_eq!(translator.quads.len(), 2);
}


#[test]
fn test_every_address_patched_once() {
	let input = "
		int a;
		while a < 10 do (
			if a mod 2 = 0 then print a else print -a;
			a := a + 1
		)
	";

	let mut interner = symbol::Interner::new();
	let mut translator = translator(input, &mut interner);

	translator.translate_declarations().expect("valid declarations");
	let statement = translator.translate_statement_list().expect("valid statements");

	let exit = translator.quads.marker();
	translator.quads.backpatch(statement.nextlist, exit).expect("valid patch");

	assert_eq!(translator.quads.pending().count(), 0);
	assert_eq!(
		translator.quads.patched(),
		[address(4), address(5), address(7), address(1), address(2)]
	);

	let program = translator.translate().expect("valid program");

	assert_eq!(
		listing(&program, &interner),
		[
			"if a < 10 goto 3",
			"goto 13",
			"t1 := a mod 2",
			"if t1 = 0 goto 6",
			"goto 8",
			"print a",
			"goto 10",
			"t2 := 0 - a",
			"print t2",
			"t3 := a + 1",
			"a := t3",
			"goto 1",
		]
	);
}


#[test]
fn test_no_dangling_placeholders() {
	let input = "
		int a, b; real x;
		while not (a >= b or a = 0) and true do (
			x := a < b and b <> 3;
			if x then a := a + 1 else (b := b - 1; print b)
		);
		print x
	";

	let mut interner = symbol::Interner::new();
	let program = compile(&source(input), &mut interner).expect("valid program");
	let exit = program.exit();

	for (_, quad) in program.iter() {
		if let Some(&target) = quad.jump() {
			assert!(target >= Address::FIRST && target <= exit);
		}
	}
}


#[test]
fn test_determinism() {
	let input = "
		int a, b, c;
		if a < b and (b < c or not c = a) then
			while a < c do a := a + b * 2
		else
			c := -(a mod b);
		print c
	";

	assert_eq!(translate(input), translate(input));
}


#[test]
fn test_positive() -> io::Result<()> {
	let mut interner = symbol::Interner::new();

	tests::util::test_dir(
		"src/translate/tests/data/positive",
		move |path, file| {
			let source = Source::from_reader(path, file)?;

			if let Err(error) = compile(&source, &mut interner) {
				panic!("{}: {}", path.display(), crate::fmt::Show(&error, &interner));
			}

			Ok(())
		}
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	let mut interner = symbol::Interner::new();

	tests::util::test_dir(
		"src/translate/tests/data/negative",
		move |path, file| {
			let source = Source::from_reader(path, file)?;

			match compile(&source, &mut interner) {
				Ok(program) => panic!("{}: {:#?}", path.display(), program),
				Err(error) => assert!(!error.is_internal(), "{}: {}", path.display(), error),
			}

			Ok(())
		}
	)
}
