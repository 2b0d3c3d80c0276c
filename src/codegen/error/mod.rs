mod fmt;

use std::io;

use crate::syntax::lexer::{self, Token, TokenKind};
use crate::syntax::SourcePos;


/// The kind of token the compiler was expecting.
#[derive(Debug)]
pub enum Expected {
	Token(TokenKind),
	Message(&'static str),
}


/// A compilation error. Every error aborts the compilation of the current unit; there
/// is no recovery.
#[derive(Debug)]
pub enum Error {
	/// Premature end of input.
	UnexpectedEof,
	/// Unexpected token.
	Unexpected { token: Token, expected: Expected },
	/// A name used where a declared variable is required, but never declared.
	Undeclared { name: Box<[u8]>, pos: SourcePos },
	/// A lexical error in the token stream.
	Lexer(lexer::Error),
	/// Failure writing to the output sink.
	Io(io::Error),
}


impl Error {
	/// Create an error signaling unexpected end of input.
	pub fn unexpected_eof() -> Self {
		Self::UnexpectedEof
	}


	/// Create an error signaling an unexpected token, and what was expected.
	pub fn unexpected(token: Token, expected: TokenKind) -> Self {
		Self::Unexpected { token, expected: Expected::Token(expected) }
	}


	/// Create an error signaling an unexpected token, and a message.
	pub fn unexpected_msg(token: Token, message: &'static str) -> Self {
		Self::Unexpected { token, expected: Expected::Message(message) }
	}


	/// Create an error signaling the use of an undeclared variable.
	pub fn undeclared(name: &[u8], pos: SourcePos) -> Self {
		Self::Undeclared { name: name.into(), pos }
	}
}


impl From<lexer::Error> for Error {
	fn from(error: lexer::Error) -> Self {
		Self::Lexer(error)
	}
}


impl From<io::Error> for Error {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}


impl std::error::Error for Error {}
