use super::{
	symbol::{Slash, SymbolChar},
	word::IsWord,
	Cursor,
	Error,
	NumberLiteral,
	State,
	StringLiteral,
	Token,
	Transition,
	Word,
};


/// The top level lexer state.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Whitespace.
			Some(c) if c.is_ascii_whitespace() => Transition::step(self),

			// String literals.
			Some(b'"') => Transition::step(StringLiteral::at(cursor)),

			// Integer literals.
			Some(c) if c.is_ascii_digit() => Transition::step(NumberLiteral::at(cursor)),

			// Identifiers and keywords.
			Some(c) if c.is_word_start() => Transition::resume(Word::at(cursor)),

			// Symbols, including the slash, which may open a comment instead.
			Some(c) => match SymbolChar::from_first(c) {
				SymbolChar::None => Transition::error(self, Error::unexpected(c, cursor.pos())),

				SymbolChar::Slash => Transition::step(Slash::at(cursor)),

				SymbolChar::Single(kind) => {
					Transition::produce(self, Token { kind, pos: cursor.pos() })
				}
			},

			// Eof.
			None => Transition::step(self),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}
