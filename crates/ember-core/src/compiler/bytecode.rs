//! Bytecode definitions.
//!
//! A [`Chunk`] is the unit handed to the execution engine: a flat byte
//! stream of instructions, a line table of the same length, and the constant
//! pool the instructions index into.

use thiserror::Error;

use super::buffer::GrowableArray;
use crate::runtime::value::Value;

/// Largest number of constants a single chunk can address.
///
/// [`OpCode::Constant`] takes a one-byte operand.
pub const MAX_CONSTANTS: usize = u8::MAX as usize + 1;

/// Errors raised while building or decoding a chunk.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
    /// The constant pool already holds [`MAX_CONSTANTS`] entries.
    #[error("Too many constants in one chunk.")]
    TooManyConstants,

    /// A byte that does not name any instruction.
    #[error("Unknown opcode {0}")]
    UnknownOpcode(u8),
}

/// Operation codes understood by the execution engine.
///
/// The discriminants are the wire encoding and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Push a constant; followed by one byte holding the pool index
    Constant = 0,
    /// Return from the current chunk
    Return = 1,
    /// Negate the top of the stack
    Negate = 2,
    /// Add top two values
    Add = 3,
    /// Subtract
    Subtract = 4,
    /// Multiply
    Multiply = 5,
    /// Divide
    Divide = 6,
}

impl OpCode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> usize {
        match self {
            OpCode::Constant => 1,
            OpCode::Return
            | OpCode::Negate
            | OpCode::Add
            | OpCode::Subtract
            | OpCode::Multiply
            | OpCode::Divide => 0,
        }
    }

    /// Disassembler mnemonic.
    pub const fn name(self) -> &'static str {
        match self {
            OpCode::Constant => "OP_CONSTANT",
            OpCode::Return => "OP_RETURN",
            OpCode::Negate => "OP_NEGATE",
            OpCode::Add => "OP_ADD",
            OpCode::Subtract => "OP_SUBTRACT",
            OpCode::Multiply => "OP_MULTIPLY",
            OpCode::Divide => "OP_DIVIDE",
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}

impl TryFrom<u8> for OpCode {
    type Error = ChunkError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        let op = match byte {
            0 => OpCode::Constant,
            1 => OpCode::Return,
            2 => OpCode::Negate,
            3 => OpCode::Add,
            4 => OpCode::Subtract,
            5 => OpCode::Multiply,
            6 => OpCode::Divide,
            other => return Err(ChunkError::UnknownOpcode(other)),
        };
        Ok(op)
    }
}

/// A compiled bytecode chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    code: GrowableArray<u8>,
    lines: GrowableArray<u32>,
    constants: GrowableArray<Value>,
}

impl Chunk {
    /// Creates a new empty chunk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw byte produced by source line `line`.
    pub fn write(&mut self, byte: u8, line: u32) {
        self.code.push(byte);
        self.lines.push(line);
        debug_assert_eq!(self.code.capacity(), self.lines.capacity());
    }

    /// Appends an opcode produced by source line `line`.
    pub fn write_op(&mut self, op: OpCode, line: u32) {
        self.write(op.into(), line);
    }

    /// Adds a constant and returns its index.
    ///
    /// A full pool is left untouched and reported as
    /// [`ChunkError::TooManyConstants`].
    pub fn add_constant(&mut self, value: Value) -> Result<u8, ChunkError> {
        let index = u8::try_from(self.constants.len()).map_err(|_| ChunkError::TooManyConstants)?;
        self.constants.push(value);
        Ok(index)
    }

    /// Releases every buffer and returns the chunk to its empty state.
    pub fn free(&mut self) {
        self.code.free();
        self.lines.free();
        self.constants.free();
    }

    /// The instruction bytes.
    pub fn code(&self) -> &[u8] {
        self.code.as_slice()
    }

    /// The source line of every instruction byte.
    pub fn lines(&self) -> &[u32] {
        self.lines.as_slice()
    }

    /// The constant pool.
    pub fn constants(&self) -> &[Value] {
        self.constants.as_slice()
    }

    /// Looks up a constant by the index an instruction carries.
    pub fn constant(&self, index: u8) -> Option<&Value> {
        self.constants.get(usize::from(index))
    }

    /// Source line of the byte at `offset`.
    pub fn line_at(&self, offset: usize) -> Option<u32> {
        self.lines.get(offset).copied()
    }

    /// Number of instruction bytes.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Returns true if no instruction has been written.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Capacity of the instruction and line buffers.
    pub fn capacity(&self) -> usize {
        self.code.capacity()
    }
}
