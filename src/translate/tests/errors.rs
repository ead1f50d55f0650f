use assert_matches::assert_matches;

use super::*;
use crate::term::color;


fn fail(input: &str) -> (Error, symbol::Interner) {
	let mut interner = symbol::Interner::new();

	match compile(&source(input), &mut interner) {
		Ok(program) => panic!("expected error, got {:#?}", program),
		Err(error) => (error, interner),
	}
}


#[test]
fn test_undeclared_assignment_target() {
	let (error, interner) = fail("int a;\nb := a");

	assert_matches!(
		error,
		Error::UndeclaredVariable { symbol, pos } => {
			assert_eq!(interner.resolve(symbol), Some("b"));
			assert_eq!(pos, SourcePos { line: 2, column: 0 });
		}
	);
}


#[test]
fn test_undeclared_operand() {
	let (error, interner) = fail("int a; while a < b do a := 1");

	assert_matches!(
		error,
		Error::UndeclaredVariable { symbol, .. } => assert_eq!(interner.resolve(symbol), Some("b"))
	);
}


#[test]
fn test_duplicate_declaration() {
	let (error, interner) = fail("int a, b;\nreal c, a;");

	assert_matches!(
		error,
		Error::DuplicateDeclaration { symbol, pos } => {
			assert_eq!(interner.resolve(symbol), Some("a"));
			assert_eq!(pos, SourcePos { line: 2, column: 8 });
		}
	);
}


#[test]
fn test_unexpected_token() {
	assert_matches!(
		fail("int a; a := ;").0,
		Error::Unexpected {
			token: Token { kind: TokenKind::Semicolon, .. },
			expected: Expected::Message("expression"),
		}
	);

	assert_matches!(
		fail("int a; if a < 1 print a").0,
		Error::Unexpected {
			token: Token { kind: TokenKind::Keyword(Keyword::Print), .. },
			expected: Expected::Token(TokenKind::Keyword(Keyword::Then)),
		}
	);

	assert_matches!(
		fail("int a; a := 1 a := 2").0,
		Error::Unexpected {
			token: Token { kind: TokenKind::Identifier(_), .. },
			expected: Expected::Message("';' or end of file"),
		}
	);

	// Declarations must precede statements.
	assert_matches!(
		fail("int a; a := 1; int b;").0,
		Error::Unexpected {
			token: Token { kind: TokenKind::Keyword(Keyword::Int), .. },
			expected: Expected::Message("statement"),
		}
	);

	// Relational operators don't chain.
	assert_matches!(
		fail("int a; if a < 1 < 2 then print a").0,
		Error::Unexpected { expected: Expected::Token(TokenKind::Keyword(Keyword::Then)), .. }
	);

	assert_matches!(
		fail("int a; ()").0,
		Error::Unexpected {
			token: Token { kind: TokenKind::CloseParens, .. },
			expected: Expected::Message("statement"),
		}
	);
}


#[test]
fn test_unexpected_eof() {
	assert_matches!(fail("int a; a :=").0, Error::UnexpectedEof);
	assert_matches!(fail("int a; while a < 1 do").0, Error::UnexpectedEof);
	assert_matches!(fail("int a; (print a").0, Error::UnexpectedEof);
	assert_matches!(fail("int").0, Error::UnexpectedEof);
}


#[test]
fn test_lexer_errors_take_precedence() {
	// The translator sees a truncated but valid program.
	assert_matches!(
		fail("int a; a := 1 $").0,
		Error::Lexer(lexer::Error { error: lexer::ErrorKind::Unexpected(b'$'), .. })
	);

	// The translator sees a premature end of file.
	assert_matches!(
		fail("int a; if a : 1 then print a").0,
		Error::Lexer(lexer::Error { error: lexer::ErrorKind::Unexpected(b':'), .. })
	);

	// Out of range reals are lexical errors.
	assert_matches!(
		fail("real r; r := 1e400").0,
		Error::Lexer(lexer::Error { error: lexer::ErrorKind::InvalidNumber(_), .. })
	);
}


#[test]
fn test_earlier_errors_take_precedence_over_lexer_errors() {
	let (error, interner) = fail("int a;\nb @");

	assert_matches!(
		error,
		Error::UndeclaredVariable { symbol, pos } => {
			assert_eq!(interner.resolve(symbol), Some("b"));
			assert_eq!(pos, SourcePos { line: 2, column: 0 });
		}
	);

	assert_matches!(
		fail("int a; a := a )").0,
		Error::Unexpected { token: Token { kind: TokenKind::CloseParens, .. }, .. }
	);

	assert_matches!(
		fail("int a; a := a ) @").0,
		Error::Unexpected { token: Token { kind: TokenKind::CloseParens, .. }, .. }
	);
}


#[test]
fn test_error_messages() {
	let (error, interner) = fail("int a;\na := b");

	assert_eq!(
		crate::fmt::Show(&error, &interner).to_string(),
		format!("line 2, column 5 - undeclared variable '{}'", color::Fg(color::Yellow, "b")),
	);

	let (error, interner) = fail("int a; a := 1 a");

	assert_eq!(
		crate::fmt::Show(&error, &interner).to_string(),
		"line 1, column 14 - unexpected 'a', expected ';' or end of file",
	);
}


#[test]
fn test_nesting_too_deep() {
	let nest = |open: &str, inner: &str, close: &str, depth: usize| {
		format!("{}{}{}", open.repeat(depth), inner, close.repeat(depth))
	};

	let parens = format!("int a; a := {}", nest("(", "a", ")", 1000));
	assert_matches!(fail(&parens).0, Error::NestingTooDeep { .. });

	let negations = format!("int a; a := {}a", "-".repeat(1000));
	assert_matches!(fail(&negations).0, Error::NestingTooDeep { .. });

	let nots = format!("int a; if {}a < 1 then print a", "not ".repeat(1000));
	assert_matches!(fail(&nots).0, Error::NestingTooDeep { .. });

	let compound = format!("int a; {}", nest("(", "print a", ")", 1000));
	assert_matches!(fail(&compound).0, Error::NestingTooDeep { .. });

	let ifs = format!("int a; {}print a", "if a < 1 then ".repeat(1000));
	assert_matches!(
		fail(&ifs).0,
		Error::NestingTooDeep { pos } => assert_eq!(pos.line, 1)
	);
}


#[test]
fn test_moderate_nesting() {
	let mut interner = symbol::Interner::new();

	let parens = format!("int a; a := {}a{}", "(".repeat(100), ")".repeat(100));
	assert!(compile(&source(&parens), &mut interner).is_ok());

	let compound = format!("int a; {}print a{}", "(".repeat(60), ")".repeat(60));
	assert!(compile(&source(&compound), &mut interner).is_ok());
}
