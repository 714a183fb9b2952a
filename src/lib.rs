//! Bytecode storage for a Lox virtual machine: chunks of instruction bytes with
//! their source lines and constant pools, and a disassembler for inspecting them.

pub mod utils;

pub mod memory;
pub mod value;
pub mod bytecode;

pub mod debug;


pub use value::{Value, ConstID};
pub use bytecode::{Chunk, OpCode, LineNo};
pub use debug::{disassemble_chunk, disassemble_instruction};
