//! Bytecode compiler for Ember.
//!
//! Transforms source text into a [`Chunk`] in a single pass.
//!
//! # Module Structure
//!
//! - `buffer`: Amortized-doubling array backing every chunk table
//! - `bytecode`: Opcodes and the chunk container
//! - `codegen`: The Pratt parser that emits bytecode
//!   - `codegen::rules`: The per-token rule table
//! - `disasm`: Human-readable chunk listings

pub mod buffer;
pub mod bytecode;
pub mod codegen;
pub mod disasm;

pub use buffer::GrowableArray;
pub use bytecode::{Chunk, ChunkError, MAX_CONSTANTS, OpCode};
pub use codegen::{CompileOutcome, Diagnostic, Location, Parser, Precedence};
pub use disasm::{disassemble_chunk, disassemble_instruction};
