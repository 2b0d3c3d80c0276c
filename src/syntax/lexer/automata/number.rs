use super::{Cursor, Error, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing integer literals, which are maximal runs of decimal digits.
#[derive(Debug)]
pub(super) struct NumberLiteral {
	start_offset: usize,
	pos: SourcePos,
}


impl NumberLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Consume digits.
			Some(c) if c.is_ascii_digit() => Transition::step(self),

			// Stop and produce when a non-digit is found, including EOF.
			_ => match self.parse(cursor) {
				Ok(token) => Transition::resume_produce(Root, token),
				Err(error) => Transition::resume_error(Root, error),
			},
		}
	}


	/// Parse the consumed characters. Literals that don't fit the 16 bit word are
	/// rejected.
	fn parse(&self, cursor: &Cursor) -> Result<Token, Error> {
		let number = &cursor.slice()[self.start_offset .. cursor.offset()];

		// There is no method in std to parse a number from a byte array.
		let number_str = std::str::from_utf8(number)
			.expect("number literals should be valid ascii, which should be valid utf8");

		match number_str.parse() {
			Ok(int) => Ok(
				Token {
					kind: TokenKind::Int(int),
					pos: self.pos,
				}
			),
			Err(_) => Err(Error::invalid_number(number, self.pos)),
		}
	}
}


impl From<NumberLiteral> for State {
	fn from(state: NumberLiteral) -> State {
		State::NumberLiteral(state)
	}
}
