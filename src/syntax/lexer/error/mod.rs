mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug)]
pub enum ErrorKind {
	/// Unexpected end of file, in a string literal or block comment.
	UnexpectedEof,
	/// Unexpected character.
	Unexpected(u8),
	/// Integer literal out of range.
	InvalidNumber(Box<[u8]>),
}


/// A lexical error.
#[derive(Debug)]
pub struct Error {
	pub error: ErrorKind,
	pub pos: SourcePos,
}


impl Error {
	pub fn unexpected_eof(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnexpectedEof, pos }
	}

	pub fn unexpected(input: u8, pos: SourcePos) -> Self {
		Self { error: ErrorKind::Unexpected(input), pos }
	}

	pub fn invalid_number(number: &[u8], pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::InvalidNumber(number.into()),
			pos,
		}
	}
}


impl std::error::Error for Error {}
