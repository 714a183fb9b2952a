use std::fmt;
use std::fmt::Formatter;
use log;

use crate::bytecode::{Chunk, OpCode};


/// Prints a header line followed by one line per decoded instruction.
pub fn disassemble_chunk(chunk: &Chunk, label: &str) {
    let mut output = String::new();
    match write_chunk(&mut output, chunk, label) {
        Ok(()) => print!("{}", output),
        Err(error) => log::error!("could not disassemble \"{}\": {}", label, error),
    }
}

/// Prints the instruction at `offset` and returns the offset to decode next.
///
/// # Panics
///
/// If `offset` lies past the end of the chunk.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> usize {
    let mut line = String::new();
    match write_instruction(&mut line, chunk, offset) {
        Ok(next) => {
            print!("{}", line);
            next
        },
        Err(error) => {
            log::error!("could not disassemble offset {}: {}", offset, error);
            offset + 1
        },
    }
}

/// Writes a `== label ==` header followed by one line per decoded instruction.
pub fn write_chunk(out: &mut impl fmt::Write, chunk: &Chunk, label: &str) -> fmt::Result {
    writeln!(out, "== {} ==", label)?;
    write_instructions(out, chunk, false)
}

/// Writes the instruction at `offset` as a single line and returns the offset to decode next.
///
/// # Panics
///
/// If `offset` lies past the end of the chunk.
pub fn write_instruction(out: &mut impl fmt::Write, chunk: &Chunk, offset: usize) -> Result<usize, fmt::Error> {
    let instr = Instruction::decode(chunk.code(), offset);
    write_line(out, offset, &instr)?;
    Ok(step(offset, &instr, false))
}

fn write_instructions(out: &mut impl fmt::Write, chunk: &Chunk, skip_operands: bool) -> fmt::Result {
    let instrs = Instructions {
        code: chunk.code(),
        offset: 0,
        skip_operands,
    };

    for (offset, instr) in instrs {
        write_line(out, offset, &instr)?;
    }
    Ok(())
}

fn write_line(out: &mut impl fmt::Write, offset: usize, instr: &Instruction) -> fmt::Result {
    writeln!(out, "{:04} {}", offset, instr)
}


/// A single decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Simple(OpCode),
    ConstIndex(OpCode, u8),
    /// an opcode whose operand bytes run past the end of the chunk
    Truncated(OpCode),
    Unknown(u8),
}

impl Instruction {
    /// Decodes the instruction starting at `offset`. Only the operand bytes that the
    /// opcode calls for are read.
    ///
    /// # Panics
    ///
    /// If `offset` lies past the end of `code`.
    pub fn decode(code: &[u8], offset: usize) -> Self {
        let byte = code[offset];
        match OpCode::from_byte(byte) {
            Some(opcode @ OpCode::Constant) => match code.get(offset + 1) {
                Some(cid) => Self::ConstIndex(opcode, *cid),
                None => Self::Truncated(opcode),
            },
            Some(opcode @ OpCode::Return) => Self::Simple(opcode),
            None => Self::Unknown(byte),
        }
    }

    pub fn opcode(&self) -> Option<OpCode> {
        match self {
            Self::Simple(opcode) | Self::ConstIndex(opcode, ..) | Self::Truncated(opcode) => Some(*opcode),
            Self::Unknown(..) => None,
        }
    }

    /// Number of bytes the instruction occupies in the stream
    pub fn width(&self) -> usize {
        self.opcode().map_or(1, |op| op.instr_len())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(opcode) => write!(fmt, "{}", opcode),
            Self::ConstIndex(opcode, cid) => write!(fmt, "{:16} {: >4}", opcode, cid),
            Self::Truncated(opcode) => write!(fmt, "{:16} <end of chunk>", opcode),
            Self::Unknown(byte) => write!(fmt, "Unknown opcode {}", byte),
        }
    }
}


// Without skip_operands every instruction advances the walk by a single byte,
// so a constant's operand is decoded again as the next opcode.
fn step(offset: usize, instr: &Instruction, skip_operands: bool) -> usize {
    if skip_operands {
        offset + instr.width()
    } else {
        offset + 1
    }
}


/// Iterator over `(offset, instruction)` pairs of a chunk
pub struct Instructions<'c> {
    code: &'c [u8],
    offset: usize,
    skip_operands: bool,
}

impl Iterator for Instructions<'_> {
    type Item = (usize, Instruction);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.code.len() {
            return None;
        }

        let offset = self.offset;
        let instr = Instruction::decode(self.code, offset);
        self.offset = step(offset, &instr, self.skip_operands);
        Some((offset, instr))
    }
}


pub struct Disassembler<'c, 'l> {
    chunk: &'c Chunk,
    label: Option<&'l str>,
    skip_operands: bool,
}

impl<'c, 'l> Disassembler<'c, 'l> {
    pub fn new(chunk: &'c Chunk) -> Self {
        Self { chunk, label: None, skip_operands: false }
    }

    /// Emit a `== label ==` header before the instructions
    pub fn with_label(mut self, label: &'l str) -> Self {
        self.label.replace(label); self
    }

    /// Advance past operand bytes instead of decoding them as opcodes
    pub fn with_operand_skip(mut self, skip_operands: bool) -> Self {
        self.skip_operands = skip_operands; self
    }

    pub fn instructions(&self) -> Instructions<'c> {
        Instructions {
            code: self.chunk.code(),
            offset: 0,
            skip_operands: self.skip_operands,
        }
    }

    fn decode_chunk(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            writeln!(fmt, "== {} ==", label)?;
        }

        write_instructions(fmt, self.chunk, self.skip_operands)
    }
}

impl fmt::Display for Disassembler<'_, '_> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        self.decode_chunk(fmt)
    }
}
