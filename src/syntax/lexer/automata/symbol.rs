use super::{
	BlockComment,
	Comment,
	Cursor,
	Operator,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// Classification of a symbol character.
pub(super) enum SymbolChar {
	/// Not a symbol character.
	None,
	/// Jack symbols are single characters. We can produce them straight away.
	Single(TokenKind),
	/// Except for the slash, which may open a comment instead of being the division
	/// operator. We must look at the next character to decide.
	Slash,
}


impl SymbolChar {
	pub fn from_first(first: u8) -> Self {
		let token = Self::Single;
		let operator = |op| token(TokenKind::Operator(op));

		match first {
			b'+' => operator(Operator::Plus),
			b'-' => operator(Operator::Minus),
			b'*' => operator(Operator::Times),
			b'&' => operator(Operator::And),
			b'|' => operator(Operator::Or),
			b'<' => operator(Operator::Lower),
			b'>' => operator(Operator::Greater),
			b'=' => operator(Operator::Equals),
			b'~' => operator(Operator::Not),

			b'{' => token(TokenKind::OpenBrace),
			b'}' => token(TokenKind::CloseBrace),
			b'(' => token(TokenKind::OpenParens),
			b')' => token(TokenKind::CloseParens),
			b'[' => token(TokenKind::OpenBracket),
			b']' => token(TokenKind::CloseBracket),

			b'.' => token(TokenKind::Dot),
			b',' => token(TokenKind::Comma),
			b';' => token(TokenKind::Semicolon),

			b'/' => Self::Slash,

			// Not a symbol character:
			_ => SymbolChar::None,
		}
	}
}


/// The state after a slash: a line comment, a block comment, or the division operator.
#[derive(Debug)]
pub(super) struct Slash {
	pos: SourcePos,
}


impl Slash {
	pub fn at(cursor: &Cursor) -> Self {
		Self { pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			Some(b'/') => Transition::step(Comment),

			Some(b'*') => Transition::step(BlockComment::default()),

			// Anything else, including EOF, means the slash was the division operator.
			_ => Transition::resume_produce(
				Root,
				Token {
					kind: TokenKind::Operator(Operator::Div),
					pos: self.pos,
				},
			),
		}
	}
}


impl From<Slash> for State {
	fn from(state: Slash) -> State {
		State::Slash(state)
	}
}
