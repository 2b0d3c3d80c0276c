use super::*;

use assert_matches::assert_matches;


macro_rules! token {
	($kind:pat) => {
		Ok(Token { kind: $kind, .. })
	};
}

macro_rules! error {
	($error:pat) => {
		Err(Error { error: $error, .. })
	};
}


fn lex(input: &str) -> Vec<Result<Token, Error>> {
	Lexer
		::new(Cursor::from(input.as_bytes()))
		.collect()
}


#[test]
fn test_simple_class() {
	let input = r#"
		// A trivial class.
		class Main {
			static int count;

			/* block
			   comment */
			function void main() {
				var int x;
				let x = count * 2;
				return;
			}
		}
	"#;

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Class)),
			token!(TokenKind::Identifier(class_name)),
			token!(TokenKind::OpenBrace),
			token!(TokenKind::Keyword(Keyword::Static)),
			token!(TokenKind::Keyword(Keyword::Int)),
			token!(TokenKind::Identifier(count1)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Keyword(Keyword::Function)),
			token!(TokenKind::Keyword(Keyword::Void)),
			token!(TokenKind::Identifier(main)),
			token!(TokenKind::OpenParens),
			token!(TokenKind::CloseParens),
			token!(TokenKind::OpenBrace),
			token!(TokenKind::Keyword(Keyword::Var)),
			token!(TokenKind::Keyword(Keyword::Int)),
			token!(TokenKind::Identifier(x1)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Keyword(Keyword::Let)),
			token!(TokenKind::Identifier(x2)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::Identifier(count2)),
			token!(TokenKind::Operator(Operator::Times)),
			token!(TokenKind::Int(2)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Keyword(Keyword::Return)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::CloseBrace),
			token!(TokenKind::CloseBrace),
		]
			=> {
				assert_eq!(class_name.as_ref(), b"Main");
				assert_eq!(count1.as_ref(), b"count");
				assert_eq!(count2.as_ref(), b"count");
				assert_eq!(main.as_ref(), b"main");
				assert_eq!(x1.as_ref(), b"x");
				assert_eq!(x2.as_ref(), b"x");
			}
	);
}


#[test]
fn test_operators_and_symbols() {
	let input = "+ - * / & | < > = ~ . , ; ( ) [ ] { }";

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Operator(Operator::Plus)),
			token!(TokenKind::Operator(Operator::Minus)),
			token!(TokenKind::Operator(Operator::Times)),
			token!(TokenKind::Operator(Operator::Div)),
			token!(TokenKind::Operator(Operator::And)),
			token!(TokenKind::Operator(Operator::Or)),
			token!(TokenKind::Operator(Operator::Lower)),
			token!(TokenKind::Operator(Operator::Greater)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::Operator(Operator::Not)),
			token!(TokenKind::Dot),
			token!(TokenKind::Comma),
			token!(TokenKind::Semicolon),
			token!(TokenKind::OpenParens),
			token!(TokenKind::CloseParens),
			token!(TokenKind::OpenBracket),
			token!(TokenKind::CloseBracket),
			token!(TokenKind::OpenBrace),
			token!(TokenKind::CloseBrace),
		]
	);
}


#[test]
fn test_string_literals() {
	let input = r#"
		let greeting = "hello world";
		let empty = "";
	"#;

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Let)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::String(lit1)),
			token!(TokenKind::Semicolon),

			token!(TokenKind::Keyword(Keyword::Let)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::String(lit2)),
			token!(TokenKind::Semicolon),
		]
			=> {
				// The quotes are excluded from the value.
				assert_eq!(lit1.as_ref(), b"hello world");
				assert!(lit2.is_empty());
			}
	);
}


#[test]
fn test_number_literals() {
	let input = "0 15 32767 65536";

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Int(0)),
			token!(TokenKind::Int(15)),
			token!(TokenKind::Int(32767)),
			error!(ErrorKind::InvalidNumber(overflow)),
		]
			=> {
				assert_eq!(overflow.as_ref(), b"65536");
			}
	);
}


#[test]
fn test_invalid_characters() {
	let input = "let $x = 1 ? 2;";

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Let)),
			error!(ErrorKind::Unexpected(b'$')),
			token!(TokenKind::Identifier(x)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::Int(1)),
			error!(ErrorKind::Unexpected(b'?')),
			token!(TokenKind::Int(2)),
			token!(TokenKind::Semicolon),
		]
			=> {
				assert_eq!(x.as_ref(), b"x");
			}
	);
}


#[test]
fn test_unterminated_string() {
	let input = r#"let x = "oops"#;

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Let)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Operator(Operator::Equals)),
			error!(ErrorKind::UnexpectedEof),
		]
	);
}


#[test]
fn test_unterminated_block_comment() {
	let input = "return /* unclosed";

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Return)),
			error!(ErrorKind::UnexpectedEof),
		]
	);
}


#[test]
fn test_division_is_not_a_comment() {
	let input = "a / b // quotient\nc /* and */ d";

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Operator(Operator::Div)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Identifier(_)),
		]
	);
}


#[test]
fn test_token_positions() {
	let input = "class\n  Main";

	let tokens = lex(input);

	assert_matches!(
		&tokens[..],
		[
			Ok(Token { kind: TokenKind::Keyword(Keyword::Class), pos: pos1 }),
			Ok(Token { kind: TokenKind::Identifier(_), pos: pos2 }),
		]
			=> {
				assert_eq!((pos1.line, pos1.column), (1, 0));
				assert_eq!((pos2.line, pos2.column), (2, 2));
			}
	);
}


/// Serialized token values use the escaped textual form for the characters that are
/// unsafe in markup.
#[test]
fn test_escaped_token_display() {
	assert_eq!(TokenKind::Operator(Operator::Lower).to_string(), "&lt;");
	assert_eq!(TokenKind::Operator(Operator::Greater).to_string(), "&gt;");
	assert_eq!(TokenKind::Operator(Operator::And).to_string(), "&amp;");
	assert_eq!(
		TokenKind::String(b"hi".to_vec().into_boxed_slice()).to_string(),
		"&quot;hi&quot;"
	);

	assert_eq!(TokenKind::Operator(Operator::Plus).to_string(), "+");
	assert_eq!(TokenKind::Keyword(Keyword::Class).to_string(), "class");
}
