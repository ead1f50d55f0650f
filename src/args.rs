use std::{ffi::OsString, path::PathBuf};

use clap::{clap_app, crate_authors, crate_version, crate_description};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


/// The output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
	/// The numbered quadruple listing.
	Quads,
	/// A C program.
	C,
	/// A JSON document.
	Json,
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The source file. Read stdin when absent.
	pub path: Option<PathBuf>,
	pub output: Output,
	/// Translate the program, but print nothing.
	pub check: bool,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		Quad =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg FILE: "The source file. Reads stdin if omitted.")
			(@arg c: --c conflicts_with[json] "Emit a C program instead of quadruples.")
			(@arg json: --json conflicts_with[c] "Emit a JSON document instead of quadruples.")
			(@arg check: --check "Only translate, printing nothing but errors.")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => {
			let output =
				if matches.is_present("c") {
					Output::C
				} else if matches.is_present("json") {
					Output::Json
				} else {
					Output::Quads
				};

			Ok(
				Command::Run(
					Args {
						path: matches.value_of_os("FILE").map(PathBuf::from),
						output,
						check: matches.is_present("check"),
					}
				)
			)
		}

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
