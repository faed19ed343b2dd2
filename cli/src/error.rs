use std::fmt;

use ls8::error::{loader::LoaderError, runtime::RuntimeError};

#[derive(Debug, Clone, PartialEq)]
pub enum CLIError {
	ExternalError(String, String),
	UnknownArgument(String),
	InsufficientArguments,
	NotFound(String),
	Malformed(LoaderError),
	Runtime(RuntimeError),
}

impl CLIError {
	/// Process exit status. Clean halt exits 0; every failure class gets
	/// its own code so the host can tell which one occurred.
	pub fn exit_code(&self) -> i32 {
		match self {
			CLIError::Runtime(RuntimeError::UnrecognizedOpcode { .. }) => 1,
			CLIError::NotFound(_) => 2,
			CLIError::Malformed(_) => 3,
			CLIError::Runtime(RuntimeError::Machine(_)) => 4,
			CLIError::Runtime(RuntimeError::ExternalError(..)) => 5,
			CLIError::ExternalError(..) => 5,
			CLIError::UnknownArgument(_) | CLIError::InsufficientArguments => 64,
		}
	}
}

impl fmt::Display for CLIError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self, f)
	}
}

pub type CLIResult<O = ()> = Result<O, CLIError>;
