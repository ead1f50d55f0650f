mod args;
mod emit;
mod fmt;
mod symbol;
mod syntax;
mod term;
mod translate;
#[cfg(test)]
mod tests;

use std::path::Path;

use log::info;

use args::{Args, Command, Output};
use term::color;


/// The program was translated, and the output printed.
const SUCCESS: i32 = 0;
/// The source couldn't be read, or the arguments are invalid.
const IO_ERROR: i32 = 1;
/// The source program is invalid.
const USER_ERROR: i32 = 2;
/// The translator violated its own invariants.
const INTERNAL_ERROR: i32 = 3;


fn main() -> ! {
	env_logger::init();

	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(IO_ERROR)
		}
	};

	let exit_code = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			SUCCESS
		},
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> i32 {
	let source = match &args.path {
		Some(path) => syntax::Source::from_path(path.as_path()),
		None => syntax::Source::from_reader(Path::new("<stdin>"), std::io::stdin().lock()),
	};

	let source = match source {
		Ok(source) => source,
		Err(error) => {
			eprintln!(
				"{}: {}",
				color::Fg(color::Red, "Error"),
				error
			);
			return IO_ERROR;
		}
	};

	info!("translating {}", source.path.display());

	let mut interner = symbol::Interner::new();

	let program = match translate::compile(&source, &mut interner) {
		Ok(program) => program,

		Err(error) if error.is_internal() => {
			eprintln!(
				"{}: {}: {}",
				color::Fg(color::Red, "Internal error"),
				source.path.display(),
				fmt::Show(&error, &interner)
			);
			return INTERNAL_ERROR;
		}

		Err(error) => {
			eprintln!(
				"{}: {}: {}",
				color::Fg(color::Red, "Error"),
				source.path.display(),
				fmt::Show(&error, &interner)
			);
			return USER_ERROR;
		}
	};

	if args.check {
		return SUCCESS;
	}

	match args.output {
		Output::Quads => print!("{}", fmt::Show(emit::quads::Listing(&program), &interner)),

		Output::C => print!("{}", fmt::Show(emit::c::C::new(&program), &interner)),

		Output::Json => match emit::json::Json::new(&program, &interner).render() {
			Ok(json) => println!("{}", json),
			Err(error) => {
				eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
				return IO_ERROR;
			}
		},
	}

	SUCCESS
}
