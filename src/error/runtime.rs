use super::machine::MachineError;
use super::Ls8Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
	ExternalError(String, String),
	UnrecognizedOpcode { byte: u8, pc: usize },
	Machine(MachineError),
}

impl From<MachineError> for RuntimeError {
	fn from(e: MachineError) -> Self {
		RuntimeError::Machine(e)
	}
}

impl fmt::Display for RuntimeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self, f)
	}
}

impl Ls8Error for RuntimeError {}

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
