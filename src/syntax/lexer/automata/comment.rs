use super::{Cursor, Error, Root, State, Transition};


/// The state for lexing line comments.
#[derive(Debug)]
pub(super) struct Comment;


impl Comment {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Newline marks the end of the comment.
			Some(b'\n') => Transition::resume(Root),

			// Otherwise, eat everything.
			_ => Transition::step(self),
		}
	}
}


impl From<Comment> for State {
	fn from(state: Comment) -> State {
		State::Comment(state)
	}
}


/// The state for lexing block comments. Block comments don't nest.
#[derive(Debug, Default)]
pub(super) struct BlockComment {
	/// Whether the previous character was an asterisk.
	closing: bool,
}


impl BlockComment {
	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// EOF before the closing delimiter.
			None => Transition::error(Root, Error::unexpected_eof(cursor.pos())),

			Some(b'/') if self.closing => Transition::step(Root),

			Some(c) => {
				self.closing = c == b'*';
				Transition::step(self)
			}
		}
	}
}


impl From<BlockComment> for State {
	fn from(state: BlockComment) -> State {
		State::BlockComment(state)
	}
}
