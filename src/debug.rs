pub mod dasm;

pub use dasm::{Disassembler, Instruction, disassemble_chunk, disassemble_instruction, write_chunk, write_instruction};

mod tests;
