use static_assertions::assert_eq_size;

// Opcodes

// Each opcode gets an explicit byte value so that the
// enum below can convert to and from raw bytes

// 0x00         Control

                        // longest mnemonic must fit in 16 chars for the disassembler
const OP_RETURN:        u8 = 0x00;  // return from the current function

// 0x20         Immediate Values

const OP_CONSTANT:      u8 = 0x20;  // load a constant from the chunk's const pool by 8-bit index


#[repr(u8)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum OpCode {
    Return = OP_RETURN,
    Constant = OP_CONSTANT,
}

assert_eq_size!(OpCode, u8);

impl OpCode {
    pub fn from_byte(byte: u8) -> Option<OpCode> {
        let opcode = match byte {
            OP_RETURN => Self::Return,
            OP_CONSTANT => Self::Constant,

            _ => return None,
        };
        Some(opcode)
    }

    /// Width of the whole instruction in bytes, including the opcode
    pub fn instr_len(&self) -> usize {
        match self {
            Self::Return => 1,
            Self::Constant => 2,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Return => "RETURN",
            Self::Constant => "CONSTANT",
        }
    }
}

impl From<OpCode> for u8 {
    fn from(opcode: OpCode) -> Self { opcode as u8 }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, u8> {
        Self::from_byte(byte).ok_or(byte)
    }
}

impl PartialEq<u8> for OpCode {
    fn eq(&self, other: &u8) -> bool { *other == (*self).into() }
}

// For disassembly/debugging
impl std::fmt::Display for OpCode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mnemonic = self.mnemonic();

        if let Some(width) = fmt.width() {
            write!(fmt, "{:1$}", mnemonic, width)
        } else {
            fmt.write_str(mnemonic)
        }
    }
}
