use std::io::Write;

use num_traits::FromPrimitive;

use crate::cpu::Cpu;
use crate::machine::MEMORY_SIZE;
use crate::opcode::Opcode;

/// Renders the machine state through the engine's read-only accessors:
/// PC, the three bytes at the fetch window, then every register, plus the
/// mnemonic when the current byte decodes to a known opcode.
pub fn render<W: Write>(cpu: &Cpu<W>) -> String {
	let memory = cpu.machine().memory();
	let pc = cpu.pc();
	let at = |offset: usize| memory[(pc + offset) % MEMORY_SIZE];

	let mut line = format!(
		"TRACE: {:02X} | {:02X} {:02X} {:02X} |",
		pc,
		at(0),
		at(1),
		at(2)
	);
	for value in cpu.machine().registers() {
		line.push_str(&format!(" {:02X}", value));
	}
	if let Some(op) = Opcode::from_u8(at(0)) {
		line.push_str(&format!("  {}", op.mnemonic()));
	}
	line
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cpu::tests::util::cpu;

	#[test]
	fn renders_fetch_window_and_registers() {
		let mut cpu = cpu(&[Opcode::Ldi as u8, 0, 8, Opcode::Hlt as u8]);
		assert_eq!(
			render(&cpu),
			"TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 00  LDI"
		);
		cpu.step().unwrap();
		assert_eq!(
			render(&cpu),
			"TRACE: 03 | 01 00 00 | 08 00 00 00 00 00 00 00  HLT"
		);
	}

	#[test]
	fn unknown_byte_renders_without_mnemonic() {
		let cpu = cpu(&[0b1111_1111]);
		assert_eq!(
			render(&cpu),
			"TRACE: 00 | FF 00 00 | 00 00 00 00 00 00 00 00"
		);
	}
}
