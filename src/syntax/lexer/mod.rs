mod automata;
mod cursor;
mod error;
#[cfg(test)]
mod tests;
mod token;

use automata::Automata;
use super::SourcePos;
pub use cursor::Cursor;
pub use error::{Error, ErrorKind};
pub use token::{Keyword, Operator, Token, TokenKind};


/// The lexer for Jack source code.
#[derive(Debug)]
pub struct Lexer<'a>(Automata<'a>);


impl<'a> Lexer<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self(Automata::new(cursor))
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}
