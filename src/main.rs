mod args;
mod codegen;
mod symbol;
mod syntax;
mod term;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use term::color;

use args::{Args, Command};
use codegen::{vm, Compiler};
use syntax::lexer::{Cursor, Lexer};
use syntax::Source;


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let exit_code = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			0
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> i32 {
	let units = match discover_units(&args.path) {
		Ok(units) => units,
		Err(error) => {
			eprintln!(
				"{}: {}: {}",
				color::Fg(color::Red, "Error"),
				args.path.display(),
				error
			);
			return 1;
		}
	};

	if units.is_empty() {
		eprintln!(
			"{}: no .jack files in {}",
			color::Fg(color::Red, "Error"),
			args.path.display()
		);
		return 1;
	}

	let mut failed = false;

	// Each unit is compiled independently: an error aborts that unit only, and the
	// driver moves on to the next.
	for unit in units {
		if let Err(error) = compile_unit(&unit, args.check) {
			eprintln!(
				"{}: {}: {}",
				color::Fg(color::Red, "Error"),
				unit.display(),
				error
			);
			failed = true;
		}
	}

	if failed { 1 } else { 0 }
}


/// Collect the compilation units: the given .jack file itself, or every .jack file in
/// the given directory.
fn discover_units(path: &Path) -> io::Result<Vec<PathBuf>> {
	if path.extension().map_or(false, |extension| extension == "jack") {
		return Ok(vec![path.to_owned()]);
	}

	let pattern = path.join("*.jack");
	let pattern = pattern
		.to_str()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path is not valid utf8"))?;

	let entries = glob::glob(pattern)
		.map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

	let mut units = Vec::new();

	for entry in entries {
		match entry {
			Ok(unit) => units.push(unit),
			Err(error) => return Err(error.into_error()),
		}
	}

	units.sort();

	Ok(units)
}


/// Compile a single .jack file into a .vm file next to it.
fn compile_unit(path: &Path, check: bool) -> Result<(), codegen::Error> {
	let source = Source::from_path(path)?;

	let lexer = Lexer::new(Cursor::from(source.contents.as_ref()));

	// The output sink is released when the writer is dropped, on every exit path. A
	// partially written file after an error is a diagnostic artifact, not valid output.
	let output: Box<dyn io::Write> =
		if check {
			Box::new(io::sink())
		} else {
			Box::new(BufWriter::new(File::create(source.path.with_extension("vm"))?))
		};

	Compiler::new(lexer, vm::Writer::new(output)).compile()
}
