use std::ffi::OsString;
use std::path::PathBuf;

use clap::{clap_app, crate_description, crate_version};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args),
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The .jack file, or directory of .jack files, to compile.
	pub path: PathBuf,
	/// Compile without writing the .vm output files.
	pub check: bool,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let app = clap_app!(
		jackc =>
			(version: crate_version!())
			(about: crate_description!())
			(@arg input: +required "A .jack file, or a directory containing .jack files.")
			(@arg check: --check "Compile without writing the output files.")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					path: matches
						.value_of_os("input")
						.expect("missing required argument")
						.into(),
					check: matches.is_present("check"),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
