mod fmt;

use std::io;

use bstr::BStr;


/// A memory segment of the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
	Constant,
	Argument,
	Local,
	Static,
	This,
	That,
	Pointer,
	Temp,
}


/// An arithmetic or logical VM command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	Add,
	Sub,
	Neg,
	Eq,
	Gt,
	Lt,
	And,
	Or,
	Not,
}


/// A flush-through sink for VM instructions. Each method appends exactly one line of
/// instruction text to the underlying output; once written, an instruction is final.
/// Operands are not validated: the compiler is responsible for never requesting an
/// invalid segment, index or argument count combination.
#[derive(Debug)]
pub struct Writer<W>(W);


impl<W: io::Write> Writer<W> {
	pub fn new(output: W) -> Self {
		Self(output)
	}


	pub fn push(&mut self, segment: Segment, index: u16) -> io::Result<()> {
		writeln!(self.0, "push {} {}", segment, index)
	}


	pub fn pop(&mut self, segment: Segment, index: u16) -> io::Result<()> {
		writeln!(self.0, "pop {} {}", segment, index)
	}


	pub fn arithmetic(&mut self, command: Command) -> io::Result<()> {
		writeln!(self.0, "{}", command)
	}


	pub fn label(&mut self, label: &str) -> io::Result<()> {
		writeln!(self.0, "label {}", label)
	}


	pub fn goto(&mut self, label: &str) -> io::Result<()> {
		writeln!(self.0, "goto {}", label)
	}


	pub fn if_goto(&mut self, label: &str) -> io::Result<()> {
		writeln!(self.0, "if-goto {}", label)
	}


	/// Write a call to `class.subroutine` with the given argument count.
	pub fn call(&mut self, class: &[u8], subroutine: &[u8], args: u16) -> io::Result<()> {
		writeln!(
			self.0,
			"call {}.{} {}",
			<&BStr>::from(class),
			<&BStr>::from(subroutine),
			args
		)
	}


	/// Write the entry declaration of `class.subroutine` with the given local count.
	pub fn function(&mut self, class: &[u8], subroutine: &[u8], locals: u16) -> io::Result<()> {
		writeln!(
			self.0,
			"function {}.{} {}",
			<&BStr>::from(class),
			<&BStr>::from(subroutine),
			locals
		)
	}


	pub fn ret(&mut self) -> io::Result<()> {
		writeln!(self.0, "return")
	}


	pub fn flush(&mut self) -> io::Result<()> {
		self.0.flush()
	}
}
