use crate::error::machine::MachineResult;
use crate::machine::Machine;

/// Register-to-register arithmetic. `Add` has no opcode routed to it yet
/// and is reachable only through this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
	Add,
	Mul,
}

/// Reads both registers, computes, and writes the result back into `dest`.
/// Results wrap modulo 256 to stay in the 8-bit register domain.
pub fn apply(machine: &mut Machine, op: AluOp, dest: u8, src: u8) -> MachineResult {
	let a = machine.register_read(dest)?;
	let b = machine.register_read(src)?;
	let value = match op {
		AluOp::Add => a.wrapping_add(b),
		AluOp::Mul => a.wrapping_mul(b),
	};
	machine.register_write(dest, value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::machine::MachineError;

	fn machine_with(dest: u8, src: u8) -> Machine {
		let mut machine = Machine::new();
		machine.register_write(0, dest).unwrap();
		machine.register_write(1, src).unwrap();
		machine
	}

	#[test]
	fn mul() {
		let mut machine = machine_with(8, 9);
		apply(&mut machine, AluOp::Mul, 0, 1).unwrap();
		assert_eq!(machine.register_read(0), Ok(72));
		assert_eq!(machine.register_read(1), Ok(9));
	}

	#[test]
	fn mul_wraps_at_eight_bits() {
		let mut machine = machine_with(200, 2);
		apply(&mut machine, AluOp::Mul, 0, 1).unwrap();
		assert_eq!(machine.register_read(0), Ok((200usize * 2 % 256) as u8));
	}

	#[test]
	fn add() {
		let mut machine = machine_with(250, 10);
		apply(&mut machine, AluOp::Add, 0, 1).unwrap();
		assert_eq!(machine.register_read(0), Ok(4));
	}

	#[test]
	fn bad_register_is_fatal() {
		let mut machine = Machine::new();
		assert_eq!(
			apply(&mut machine, AluOp::Mul, 8, 0),
			Err(MachineError::OutOfRangeRegister(8))
		);
	}
}
