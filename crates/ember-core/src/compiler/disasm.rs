//! Textual disassembly of compiled chunks.
//!
//! ```text
//! == code ==
//! 0000    1 OP_CONSTANT         0 '1'
//! 0002    | OP_CONSTANT         1 '2'
//! 0004    | OP_ADD
//! 0005    2 OP_RETURN
//! ```

use std::fmt::Write;

use super::bytecode::{Chunk, OpCode};

/// Renders every instruction of `chunk` under a `== name ==` header.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {name} ==");

    let mut offset = 0;
    while offset < chunk.len() {
        offset = disassemble_instruction(chunk, offset, &mut out);
    }
    out
}

/// Renders the instruction at `offset` as one line of `out`.
///
/// Returns the offset of the following instruction.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let _ = write!(out, "{offset:04} ");

    let line = chunk.line_at(offset).unwrap_or_default();
    if offset > 0 && chunk.line_at(offset - 1) == Some(line) {
        out.push_str("   | ");
    } else {
        let _ = write!(out, "{line:4} ");
    }

    let byte = chunk.code()[offset];
    match OpCode::try_from(byte) {
        Ok(op @ OpCode::Constant) => constant_instruction(op, chunk, offset, out),
        Ok(op) => simple_instruction(op, offset, out),
        Err(err) => {
            let _ = writeln!(out, "{err}");
            offset + 1
        }
    }
}

fn simple_instruction(op: OpCode, offset: usize, out: &mut String) -> usize {
    let _ = writeln!(out, "{}", op.name());
    offset + 1
}

fn constant_instruction(op: OpCode, chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let Some(&index) = chunk.code().get(offset + 1) else {
        let _ = writeln!(out, "{:<16} <truncated>", op.name());
        return offset + 1;
    };

    match chunk.constant(index) {
        Some(value) => {
            let _ = writeln!(out, "{:<16} {index:4} '{value}'", op.name());
        }
        None => {
            let _ = writeln!(out, "{:<16} {index:4} <missing>", op.name());
        }
    }
    offset + 2
}
