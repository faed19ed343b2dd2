use std::collections::HashMap;

use lazy_static::lazy_static;
use maplit::hashmap;
use num_derive::FromPrimitive;

use crate::alu::AluOp;

/*
    R(x): value at register `x`
    PC  : program counter
*/
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Opcode {
	Hlt = 0b0000_0001, // HLT          stop fetching
	Prn = 0b0100_0111, // PRN [A]      print R(A) in decimal
	Ldi = 0b1000_0010, // LDI [A] [V]  R(A) = V
	Mul = 0b1010_0010, // MUL [A] [B]  R(A) = R(A) * R(B)
}

impl Opcode {
	pub fn mnemonic(self) -> &'static str {
		match self {
			Opcode::Hlt => "HLT",
			Opcode::Prn => "PRN",
			Opcode::Ldi => "LDI",
			Opcode::Mul => "MUL",
		}
	}
}

/// What an opcode does once its operands are in hand. Arithmetic opcodes
/// carry the ALU operation they route to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Exec {
	LoadImmediate,
	Print,
	Alu(AluOp),
	Halt,
}

/// One dispatch table entry: the opcode, its full instruction width
/// (opcode byte plus operand bytes, the engine's PC delta), and its effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpEntry {
	pub op: Opcode,
	pub width: usize,
	pub exec: Exec,
}

lazy_static! {
	/// Instruction byte -> handler. Registering a new opcode is one entry
	/// here plus its `Exec` arm in the engine.
	pub static ref OPCODES: HashMap<u8, OpEntry> = hashmap! {
		Opcode::Hlt as u8 => OpEntry { op: Opcode::Hlt, width: 1, exec: Exec::Halt },
		Opcode::Prn as u8 => OpEntry { op: Opcode::Prn, width: 2, exec: Exec::Print },
		Opcode::Ldi as u8 => OpEntry { op: Opcode::Ldi, width: 3, exec: Exec::LoadImmediate },
		Opcode::Mul as u8 => OpEntry { op: Opcode::Mul, width: 3, exec: Exec::Alu(AluOp::Mul) },
	};
}
