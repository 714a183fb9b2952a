#![cfg(test)]

use crate::bytecode::{Chunk, OpCode};
use super::dasm::{
    Disassembler, Instruction, disassemble_chunk, disassemble_instruction, write_chunk, write_instruction,
};


fn chunk_from_bytes(bytes: &[u8]) -> Chunk {
    let mut chunk = Chunk::new();
    for byte in bytes.iter() {
        chunk.write(*byte, 1);
    }
    chunk
}

fn render(chunk: &Chunk, label: &str) -> String {
    Disassembler::new(chunk).with_label(label).to_string()
}


#[test]
fn dasm_empty_chunk_prints_only_header() {
    let chunk = Chunk::new();
    assert_eq!(render(&chunk, "empty"), "== empty ==\n");
}

#[test]
fn dasm_simple_instruction() {
    let chunk = chunk_from_bytes(&[OpCode::Return.into()]);
    assert_eq!(render(&chunk, "test chunk"), "== test chunk ==\n0000 RETURN\n");
}

#[test]
fn dasm_constant_prints_raw_index() {
    let mut chunk = Chunk::new();
    for _ in 0..5 {
        chunk.add_constant(99.0);
    }
    let index = chunk.add_constant(1.2);
    chunk.write(OpCode::Constant, 1);
    chunk.write(index as u8, 1);

    let output = render(&chunk, "c");
    let line = output.lines().nth(1).unwrap();
    assert_eq!(line, "0000 CONSTANT            5");
    assert!(!line.contains("1.2"));
}

#[test]
fn dasm_constant_operand_is_decoded_again() {
    let chunk = chunk_from_bytes(&[OpCode::Constant.into(), 7]);
    let expected = concat!(
        "== k ==\n",
        "0000 CONSTANT            7\n",
        "0001 Unknown opcode 7\n",
    );
    assert_eq!(render(&chunk, "k"), expected);
}

#[test]
fn dasm_return_then_constant() {
    let mut chunk = Chunk::new();
    chunk.write(OpCode::Return, 1);
    let constant = chunk.add_constant(1.2);
    chunk.write(OpCode::Constant, 1);
    chunk.write(constant as u8, 1);

    let expected = concat!(
        "== test chunk ==\n",
        "0000 RETURN\n",
        "0001 CONSTANT            0\n",
        "0002 RETURN\n",
    );
    assert_eq!(render(&chunk, "test chunk"), expected);
}

#[test]
fn dasm_operand_skip_advances_full_width() {
    let chunk = chunk_from_bytes(&[0x00, 0x20, 0x00, 0x20, 0x20, 0x00]);

    let output = Disassembler::new(&chunk)
        .with_operand_skip(true)
        .to_string();

    let expected = concat!(
        "0000 RETURN\n",
        "0001 CONSTANT            0\n",
        "0003 CONSTANT           32\n",
        "0005 RETURN\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn dasm_unknown_opcode_continues() {
    let chunk = chunk_from_bytes(&[0xFE]);
    assert_eq!(render(&chunk, "bad"), "== bad ==\n0000 Unknown opcode 254\n");

    let chunk = chunk_from_bytes(&[0x07, 0x00, 0x99, 0x00]);
    let expected = concat!(
        "0000 Unknown opcode 7\n",
        "0001 RETURN\n",
        "0002 Unknown opcode 153\n",
        "0003 RETURN\n",
    );
    assert_eq!(Disassembler::new(&chunk).to_string(), expected);
}

#[test]
fn dasm_instruction_offsets() {
    let chunk = chunk_from_bytes(&[0x00, 0x20, 0x00, 0x42]);

    let offsets = Disassembler::new(&chunk).instructions()
        .map(|(offset, _)| offset)
        .collect::<Vec<usize>>();
    assert_eq!(offsets, [0, 1, 2, 3]);

    let instrs = Disassembler::new(&chunk).with_operand_skip(true).instructions()
        .collect::<Vec<(usize, Instruction)>>();
    assert_eq!(instrs, [
        (0, Instruction::Simple(OpCode::Return)),
        (1, Instruction::ConstIndex(OpCode::Constant, 0)),
        (3, Instruction::Unknown(0x42)),
    ]);
}

#[test]
fn instruction_widths() {
    assert_eq!(Instruction::Simple(OpCode::Return).width(), 1);
    assert_eq!(Instruction::ConstIndex(OpCode::Constant, 3).width(), 2);
    assert_eq!(Instruction::Unknown(0x99).width(), 1);
}

#[test]
fn disassemble_instruction_returns_next_offset() {
    let chunk = chunk_from_bytes(&[0x20, 0x00, 0x00, 0x5A]);
    assert_eq!(disassemble_instruction(&chunk, 0), 1);
    assert_eq!(disassemble_instruction(&chunk, 1), 2);
    assert_eq!(disassemble_instruction(&chunk, 3), 4);
}

#[test]
fn write_chunk_exact_lines() {
    let chunk = chunk_from_bytes(&[0x00, 0x20, 0x00, 0x63]);

    let mut output = String::new();
    write_chunk(&mut output, &chunk, "test chunk").unwrap();

    let expected = concat!(
        "== test chunk ==\n",
        "0000 RETURN\n",
        "0001 CONSTANT            0\n",
        "0002 RETURN\n",
        "0003 Unknown opcode 99\n",
    );
    assert_eq!(output, expected);
    assert_eq!(output, render(&chunk, "test chunk"));

    disassemble_chunk(&chunk, "test chunk");
}

#[test]
fn write_chunk_empty_is_header_only() {
    let mut output = String::new();
    write_chunk(&mut output, &Chunk::new(), "empty").unwrap();
    assert_eq!(output, "== empty ==\n");
}

#[test]
fn write_instruction_exact_lines() {
    let chunk = chunk_from_bytes(&[0x00, 0x20, 0x05, 0xEE]);

    let mut line = String::new();
    assert_eq!(write_instruction(&mut line, &chunk, 0).unwrap(), 1);
    assert_eq!(line, "0000 RETURN\n");

    line.clear();
    assert_eq!(write_instruction(&mut line, &chunk, 1).unwrap(), 2);
    assert_eq!(line, "0001 CONSTANT            5\n");

    line.clear();
    assert_eq!(write_instruction(&mut line, &chunk, 3).unwrap(), 4);
    assert_eq!(line, "0003 Unknown opcode 238\n");

    assert_eq!(disassemble_instruction(&chunk, 1), 2);
}

#[test]
fn dasm_operand_index_that_is_an_opcode_at_end() {
    let mut chunk = Chunk::new();
    for i in 0..33u8 {
        chunk.add_constant(f64::from(i));
    }
    chunk.write(OpCode::Constant, 1);
    chunk.write(32u8, 1);

    let expected = concat!(
        "== p ==\n",
        "0000 CONSTANT           32\n",
        "0001 CONSTANT         <end of chunk>\n",
    );
    assert_eq!(render(&chunk, "p"), expected);

    let mut output = String::new();
    write_chunk(&mut output, &chunk, "p").unwrap();
    assert_eq!(output, expected);
}

#[test]
fn dasm_truncated_operand() {
    let chunk = chunk_from_bytes(&[OpCode::Constant.into()]);
    assert_eq!(Instruction::decode(chunk.code(), 0), Instruction::Truncated(OpCode::Constant));
    assert_eq!(Instruction::Truncated(OpCode::Constant).width(), 2);

    let output = Disassembler::new(&chunk).with_operand_skip(true).to_string();
    assert_eq!(output, "0000 CONSTANT         <end of chunk>\n");
}
