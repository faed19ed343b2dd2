pub mod alu;
mod cpu;
mod machine;
mod opcode;

pub mod error;
pub mod loader;
pub mod trace;

pub use alu::AluOp;
pub use cpu::{Cpu, Flow};
pub use machine::{Machine, MEMORY_SIZE, NUM_REGISTERS};
pub use opcode::{Exec, OpEntry, Opcode, OPCODES};
