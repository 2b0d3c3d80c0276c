use super::{Cursor, Error, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing string literals. Jack strings have no escape sequences: the
/// literal runs from the opening double quote to the next one, which is excluded from
/// the value.
#[derive(Debug)]
pub(super) struct StringLiteral {
	/// The consumed bytes, excluding the quotes.
	value: Vec<u8>,
	/// The position of the literal.
	pos: SourcePos,
}


impl StringLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			value: Vec::with_capacity(8), // We expect most literals to not be empty.
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// EOF while scanning a literal is always an error.
			None => Transition::error(Root, Error::unexpected_eof(cursor.pos())),

			// Closing quote.
			Some(b'"') => Transition::produce(
				Root,
				Token {
					kind: TokenKind::String(self.value.into_boxed_slice()),
					pos: self.pos,
				},
			),

			// Ordinary character.
			Some(value) => {
				self.value.push(value);
				Transition::step(self)
			}
		}
	}
}


impl From<StringLiteral> for State {
	fn from(state: StringLiteral) -> State {
		State::StringLiteral(state)
	}
}
