// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # ember-core
//!
//! The front end of the Ember bytecode toolchain.
//!
//! ## Overview
//!
//! This crate turns source text into a position-annotated instruction stream
//! for a separate execution engine:
//! - A pull-based scanner over the borrowed source buffer
//! - A Pratt parser that emits bytecode directly, with no syntax tree
//! - The chunk container: instructions, a parallel line table and a
//!   constant pool
//! - A disassembler for inspecting compiled chunks
//!
//! ## Quick Start
//!
//! ```rust
//! use ember_core::{compile, Chunk, OpCode};
//!
//! let mut chunk = Chunk::new();
//! compile("1 + 2 * 3", &mut chunk)?;
//! assert_eq!(chunk.code().last(), Some(&(OpCode::Return as u8)));
//! assert_eq!(chunk.constants().len(), 3);
//! # Ok::<(), ember_core::Error>(())
//! ```
//!
//! Diagnostics use the `[line <n>] Error at '<lexeme>': <message>` format:
//!
//! ```rust
//! use ember_core::{compile, Chunk};
//!
//! let mut chunk = Chunk::new();
//! let err = compile("(1 + 2", &mut chunk).unwrap_err();
//! assert_eq!(err.to_string(), "[line 1] Error at end: Expect ')' after expression.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compiler;
pub mod config;
pub mod lexer;
pub mod runtime;

use thiserror::Error;

// Re-exports for convenience
pub use compiler::{Chunk, ChunkError, Diagnostic, OpCode, Parser};
pub use config::CompilerOptions;
pub use runtime::value::Value;

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the compilation entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source did not compile. Holds every diagnostic that was reported,
    /// in order; the chunk must not be executed.
    #[error("{}", render_diagnostics(.0))]
    Compile(Vec<Diagnostic>),
}

impl Error {
    /// The diagnostics carried by this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compile(diagnostics) => diagnostics,
        }
    }
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compiles one expression into `chunk` with the default options.
///
/// `chunk` is expected to be empty. On failure it may be partially populated
/// and must not be handed to the execution engine.
pub fn compile(source: &str, chunk: &mut Chunk) -> Result<()> {
    compile_with(source, chunk, &CompilerOptions::default())
}

/// Compiles one expression into `chunk` with explicit options.
pub fn compile_with(source: &str, chunk: &mut Chunk, options: &CompilerOptions) -> Result<()> {
    Parser::new(source, chunk, *options).compile().into_result()
}
