pub mod chunk;
pub mod opcodes;

pub use opcodes::OpCode;
pub use chunk::{Chunk, LineNo};
