use std::path::Path;

use super::{c::C, json::Json, quads::Listing};
use crate::{
	fmt::FmtString,
	symbol,
	syntax::Source,
	translate::{self, Program},
};


fn compile(input: &str, interner: &mut symbol::Interner) -> Program {
	let source = Source {
		path: Path::new("<test>").into(),
		contents: input.as_bytes().into(),
	};

	translate::compile(&source, interner).expect("valid program")
}


#[test]
fn test_listing() {
	let mut interner = symbol::Interner::new();
	let program = compile(
		"int a, b; while a < b do (a := a + 1; print a); print (b)",
		&mut interner,
	);

	assert_eq!(
		Listing(&program).fmt_string(&interner),
		concat!(
			"1: if a < b goto 3\n",
			"2: goto 7\n",
			"3: t1 := a + 1\n",
			"4: a := t1\n",
			"5: print a\n",
			"6: goto 1\n",
			"7: print b\n",
		)
	);
}


#[test]
fn test_listing_alignment() {
	let mut interner = symbol::Interner::new();
	let program = compile(
		"int a; a := 1; a := 2; a := 3; a := 4; a := 5; a := 6; a := 7; a := 8; a := 9; a := 10",
		&mut interner,
	);

	let listing = Listing(&program).fmt_string(&interner);
	let lines: Vec<&str> = listing.lines().collect();

	assert_eq!(lines.len(), 10);
	assert_eq!(lines[0], " 1: a := 1");
	assert_eq!(lines[9], "10: a := 10");
}


#[test]
fn test_c() {
	let mut interner = symbol::Interner::new();
	let program = compile(
		"
			int i; real x;
			x := 0.5;
			while not i >= 3 do (
				x := x * 2 mod 3;
				i := i + 1
			);
			print x;
			print i = 3
		",
		&mut interner,
	);

	assert_eq!(
		C::new(&program).fmt_string(&interner),
		concat!(
			"#include <math.h>\n",
			"#include <stdio.h>\n",
			"\n",
			"int main(void) {\n",
			"\tint i = 0;\n",
			"\tdouble x = 0;\n",
			"\tdouble t1 = 0;\n",
			"\tdouble t2 = 0;\n",
			"\tint t3 = 0;\n",
			"\tint t4 = 0;\n",
			"\n",
			"\tx = 0.5;\n",
			"L2:\n",
			"\tif (i >= 3) goto L10;\n",
			"\tgoto L4;\n",
			"L4:\n",
			"\tt1 = x * 2;\n",
			"\tt2 = fmod(t1, 3);\n",
			"\tx = t2;\n",
			"\tt3 = i + 1;\n",
			"\ti = t3;\n",
			"\tgoto L2;\n",
			"L10:\n",
			"\tprintf(\"%g\\n\", x);\n",
			"\tif (i == 3) goto L13;\n",
			"\tgoto L15;\n",
			"L13:\n",
			"\tt4 = 1;\n",
			"\tgoto L16;\n",
			"L15:\n",
			"\tt4 = 0;\n",
			"L16:\n",
			"\tprintf(\"%d\\n\", t4);\n",
			"\treturn 0;\n",
			"}\n",
		)
	);
}


#[test]
fn test_c_exit_label() {
	let mut interner = symbol::Interner::new();
	let program = compile("int a; if a < 1 then print a", &mut interner);

	let c = C::new(&program).fmt_string(&interner);

	assert!(c.contains("\tgoto L4;\n"));
	assert!(c.ends_with("L4:\n\treturn 0;\n}\n"));
}


#[test]
fn test_c_names() {
	let mut interner = symbol::Interner::new();
	let program = compile("int t1, t, printf; t1 := t + 1; printf := -t1", &mut interner);

	let c = C::new(&program).fmt_string(&interner);

	assert!(c.contains("\tint t1 = 0;\n\tint t = 0;\n\tint printf_ = 0;\n"));
	assert!(c.contains("\tint _t1 = 0;\n\tint _t2 = 0;\n"));
	assert!(c.contains("\t_t1 = t + 1;\n\tt1 = _t1;\n"));
	assert!(c.contains("\t_t2 = 0 - t1;\n\tprintf_ = _t2;\n"));
}


#[test]
fn test_c_renamed_names_do_not_clash() {
	let mut interner = symbol::Interner::new();
	let program = compile(
		"int EOF, printf, printf_, NAN; EOF := 1; printf := EOF; printf_ := -printf; NAN := printf_",
		&mut interner,
	);

	let c = C::new(&program).fmt_string(&interner);

	assert!(c.contains("\tint EOF_ = 0;\n\tint printf__ = 0;\n\tint printf_ = 0;\n\tint NAN_ = 0;\n"));
	assert!(c.contains("\tEOF_ = 1;\n"));
	assert!(c.contains("\tprintf__ = EOF_;\n"));
	assert!(c.contains("\tt1 = 0 - printf__;\n\tprintf_ = t1;\n"));
	assert!(c.contains("\tNAN_ = printf_;\n"));
}


#[test]
fn test_json() {
	let mut interner = symbol::Interner::new();
	let program = compile("int a; real x; x := a + 1.5; print x", &mut interner);

	let json = Json::new(&program, &interner)
		.render()
		.expect("serializable program");

	let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

	assert_eq!(
		value,
		serde_json::json!({
			"declarations": [
				{ "name": "a", "kind": "int" },
				{ "name": "x", "kind": "real" },
			],
			"temporaries": [ "t1" ],
			"quads": [
				{ "address": 1, "text": "t1 := a + 1.5" },
				{ "address": 2, "text": "x := t1" },
				{ "address": 3, "text": "print x" },
			],
		})
	);
}
