use clap::{Command, Arg, ArgMatches};

use lox::{Chunk, OpCode};
use lox::utils;
use lox::memory;
use lox::debug::Disassembler;

fn main() {
    env_logger::init();

    let app = Command::new("lox-dasm")
        .version(clap::crate_version!())
        .about("Bytecode disassembler for Lox chunks")
        .arg(
            Arg::new("bytes")
            .short('b')
            .long("bytes")
            .help("disassemble these hex bytes instead of the demo chunk, e.g. \"00 20 00\"")
            .value_name("HEX")
        )
        .arg(
            Arg::new("const")
            .short('k')
            .long("const")
            .help("add a value to the constant pool (repeatable)")
            .value_name("VALUE")
            .multiple_occurrences(true)
        )
        .arg(
            Arg::new("name")
            .short('n')
            .long("name")
            .help("label printed in the header")
            .value_name("LABEL")
        )
        .arg(
            Arg::new("skip_operands")
            .short('s')
            .long("skip-operands")
            .help("step over operand bytes instead of decoding them as opcodes")
        )
        .arg(
            Arg::new("stats")
            .long("stats")
            .help("print allocation statistics after the chunk is freed")
        );

    let args = app.get_matches();

    let chunk = match build_chunk(&args) {
        Some(chunk) => chunk,
        None => return,
    };

    let label = args.value_of("name").unwrap_or("test chunk");
    let dasm = Disassembler::new(&chunk)
        .with_label(label)
        .with_operand_skip(args.is_present("skip_operands"));

    print!("{}", dasm);
    chunk.free();

    if args.is_present("stats") {
        println!("\n{}", memory::alloc_stats());
    }
}

fn build_chunk(args: &ArgMatches) -> Option<Chunk> {
    let mut chunk = Chunk::new();

    if let Some(values) = args.values_of("const") {
        for value in values {
            match value.parse() {
                Ok(value) => { chunk.add_constant(value); },
                Err(error) => {
                    println!("Invalid constant \"{}\": {}.", value, error);
                    return None;
                },
            }
        }
    }

    if let Some(hex) = args.value_of("bytes") {
        let bytes = match utils::parse_hex_bytes(hex) {
            Ok(bytes) => bytes,
            Err(error) => {
                println!("Invalid bytes \"{}\": {}.", hex, error);
                return None;
            },
        };

        for byte in bytes {
            chunk.write(byte, 1);
        }
    } else {
        write_demo(&mut chunk);
    }

    Some(chunk)
}

fn write_demo(chunk: &mut Chunk) {
    chunk.write(OpCode::Return, 123);

    let constant = chunk.add_constant(1.2);
    chunk.write(OpCode::Constant, 123);
    chunk.write(constant as u8, 123);
}
