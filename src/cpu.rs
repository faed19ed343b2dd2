/*
    # Execution engine
    Code is executed by matching fetched bytes against the dispatch table
    inside a loop. Each table entry carries its own instruction width, so a
    handler advances the PC by exactly the bytes it consumed.

    ## Operand fetch
    The two bytes after the opcode are always read up front; narrower
    instructions simply ignore the extras. Prefetch addresses wrap inside
    the 256-byte space, so the prefetch is total even for an instruction
    sitting in the last memory cells.
*/

use std::io::{self, Write};

use crate::alu;
use crate::error::runtime::*;
use crate::machine::{Machine, MEMORY_SIZE};
use crate::opcode::{Exec, OPCODES};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flow {
	Continue,
	Halt,
}

pub struct Cpu<W: Write> {
	machine: Machine,
	pc: usize,
	halted: bool,
	out: W,
}

impl Cpu<io::Stdout> {
	pub fn new() -> Self {
		Cpu::with_output(io::stdout())
	}
}

impl Default for Cpu<io::Stdout> {
	fn default() -> Self {
		Self::new()
	}
}

impl<W: Write> Cpu<W> {
	pub fn with_output(out: W) -> Self {
		Self {
			machine: Machine::new(),
			pc: 0,
			halted: false,
			out,
		}
	}

	/// Copies `program` into memory starting at address 0, in order, and
	/// rewinds the PC. A program longer than memory is fatal.
	pub fn load(&mut self, program: &[u8]) -> RuntimeResult {
		for (address, byte) in program.iter().enumerate() {
			self.machine.write(address, *byte)?;
		}
		self.pc = 0;
		Ok(())
	}

	pub fn run(&mut self) -> RuntimeResult {
		while self.step()? == Flow::Continue {}
		Ok(())
	}

	/// One fetch-decode-execute iteration. Once halted, further calls are
	/// no-ops: nothing is fetched and no state moves.
	pub fn step(&mut self) -> RuntimeResult<Flow> {
		if self.halted {
			return Ok(Flow::Halt);
		}
		let byte = self.machine.read(self.pc)?;
		let operand_a = self.machine.read((self.pc + 1) % MEMORY_SIZE)?;
		let operand_b = self.machine.read((self.pc + 2) % MEMORY_SIZE)?;

		let entry = *OPCODES.get(&byte).ok_or(RuntimeError::UnrecognizedOpcode {
			byte,
			pc: self.pc,
		})?;
		match entry.exec {
			Exec::LoadImmediate => self.ldi(operand_a, operand_b)?,
			Exec::Print => self.prn(operand_a)?,
			Exec::Alu(op) => alu::apply(&mut self.machine, op, operand_a, operand_b)?,
			Exec::Halt => {
				self.halted = true;
				return Ok(Flow::Halt);
			}
		}
		self.pc += entry.width;
		Ok(Flow::Continue)
	}

	fn ldi(&mut self, reg: u8, value: u8) -> RuntimeResult {
		self.machine.register_write(reg, value)?;
		Ok(())
	}

	fn prn(&mut self, reg: u8) -> RuntimeResult {
		let value = self.machine.register_read(reg)?;
		writeln!(self.out, "{}", value)
			.map_err(|e| RuntimeError::ExternalError("io::Error".into(), e.to_string()))?;
		Ok(())
	}

	pub fn pc(&self) -> usize {
		self.pc
	}

	pub fn halted(&self) -> bool {
		self.halted
	}

	pub fn machine(&self) -> &Machine {
		&self.machine
	}

	pub fn output(&self) -> &W {
		&self.out
	}
}
