use log;

use crate::memory::GrowBuf;
use crate::value::{Value, ConstID, ConstPool};


/// Source line that produced a byte of code
pub type LineNo = u32;


/// One unit of bytecode: the instruction bytes, the source line of each byte,
/// and the constants those instructions refer to.
///
/// `code` and `lines` are parallel columns and always have the same length.
/// Fields are released in declaration order.
#[derive(Debug, Default)]
pub struct Chunk {
    code: GrowBuf<u8>,
    lines: GrowBuf<LineNo>,
    constants: ConstPool,
}

impl Chunk {
    pub const fn new() -> Self {
        Self {
            code: GrowBuf::new(),
            lines: GrowBuf::new(),
            constants: ConstPool::new(),
        }
    }

    // Bytes

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn code(&self) -> &[u8] {
        self.code.as_slice()
    }

    pub fn lines(&self) -> &[LineNo] {
        self.lines.as_slice()
    }

    /// The source line of the byte at `offset`
    pub fn line(&self, offset: usize) -> Option<LineNo> {
        self.lines.get(offset).copied()
    }

    // using Into<u8> so that OpCodes can be accepted without extra fuss
    pub fn write(&mut self, byte: impl Into<u8>, line: LineNo) {
        self.code.push(byte.into());
        self.lines.push(line);
        debug_assert_eq!(self.code.len(), self.lines.len());
    }

    // Constants

    pub fn constants(&self) -> &ConstPool {
        &self.constants
    }

    /// Adds a value to the constant pool. The caller is expected to emit the instruction
    /// that refers to it, using the returned index as the operand.
    pub fn add_constant(&mut self, value: Value) -> ConstID {
        self.constants.add(value)
    }

    pub fn lookup_const(&self, index: impl Into<ConstID>) -> Option<&Value> {
        self.constants.get(index)
    }

    /// Releases the code, the line table, and the constant pool, in that order.
    pub fn free(mut self) {
        log::debug!("free chunk: {} bytes of code, {} constants", self.code.len(), self.constants.len());

        self.code.release();
        self.lines.release();
        self.constants.release();
    }
}
