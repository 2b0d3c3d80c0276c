use std::fmt::{self, Display};

use bstr::BStr;

use super::{Error, Expected};


impl Display for Expected {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Token(token) => write!(f, "'{}'", token),
			Self::Message(message) => message.fmt(f),
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnexpectedEof => "unexpected end of input".fmt(f),

			Self::Unexpected { token, expected } => write!(
				f,
				"{} - unexpected '{}', expected {}",
				token.pos, token, expected
			),

			Self::Undeclared { name, pos } => write!(
				f,
				"{} - undeclared variable '{}'",
				pos,
				<&BStr>::from(name.as_ref())
			),

			Self::Lexer(error) => error.fmt(f),

			Self::Io(error) => write!(f, "io error: {}", error),
		}
	}
}
