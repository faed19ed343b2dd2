mod error;
use error::*;

use std::fs::read_to_string;
use std::io::ErrorKind;
use std::process;

use colored::Colorize;
use ls8::{loader, trace, Cpu, Flow};

const USAGE: &str = "usage: cli <program.ls8> [--trace]";

fn main() {
	if let Err(e) = cli() {
		eprintln!("{} {}", "error:".red().bold(), e);
		if e.exit_code() == 64 {
			eprintln!("{}", USAGE);
		}
		process::exit(e.exit_code());
	}
}

fn cli() -> CLIResult {
	let mut args = std::env::args();
	args.next(); // Ignore program name

	let mut file = None;
	let mut tracing = false;
	for arg in args {
		if arg == "--trace" {
			tracing = true;
		} else if file.is_none() {
			file = Some(arg);
		} else {
			return Err(CLIError::UnknownArgument(arg));
		}
	}
	let file = file.ok_or(CLIError::InsufficientArguments)?;

	let source = match read_to_string(&file) {
		Ok(s) => s,
		Err(e) => match e.kind() {
			ErrorKind::NotFound => return Err(CLIError::NotFound(file)),
			_ => return Err(CLIError::ExternalError("io::Error".into(), e.to_string())),
		},
	};

	let program = match loader::parse(&source) {
		Ok(p) => p,
		Err(e) => return Err(CLIError::Malformed(e)),
	};

	let mut cpu = Cpu::new();
	if let Err(e) = cpu.load(&program) {
		return Err(CLIError::Runtime(e));
	}

	if tracing {
		// State goes to stderr so PRN output on stdout stays clean.
		loop {
			eprintln!("{}", trace::render(&cpu));
			match cpu.step() {
				Ok(Flow::Continue) => {}
				Ok(Flow::Halt) => break,
				Err(e) => return Err(CLIError::Runtime(e)),
			}
		}
	} else if let Err(e) = cpu.run() {
		return Err(CLIError::Runtime(e));
	}

	Ok(())
}
