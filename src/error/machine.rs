use super::Ls8Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MachineError {
	OutOfRangeAddress(usize),
	OutOfRangeRegister(u8),
}

impl fmt::Display for MachineError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self, f)
	}
}

impl Ls8Error for MachineError {}

pub type MachineResult<O = ()> = Result<O, MachineError>;
