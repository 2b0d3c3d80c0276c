use std::fmt::{self, Display};

use bstr::BStr;

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnexpectedEof => "unexpected end of file".fmt(f),

			Self::Unexpected(value) => write!(f, "unexpected '{}'", *value as char),

			Self::InvalidNumber(number) => {
				write!(f, "invalid number: {}", <&BStr>::from(number.as_ref()))
			}
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - {}.", self.pos, self.error)
	}
}
