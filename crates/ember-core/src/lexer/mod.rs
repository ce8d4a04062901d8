//! Lexical analysis (tokenization) for Ember source code.
//!
//! The lexer transforms source text into a stream of tokens that the
//! compiler pulls one at a time.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token` and `TokenKind` definitions
//!
//! Lexical errors (unterminated strings, stray characters) are not signalled
//! out of band: they arrive as [`TokenKind::Error`] tokens whose lexeme is the
//! diagnostic message.
//!
//! ## Usage
//!
//! ```rust
//! use ember_core::lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("(1 + 2) * 3");
//!
//! loop {
//!     let token = scanner.scan_token();
//!     if matches!(token.kind, TokenKind::Eof) {
//!         break;
//!     }
//!     println!("{:?} {}", token.kind, token.lexeme);
//! }
//! ```

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
