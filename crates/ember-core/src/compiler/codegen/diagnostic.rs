//! Compiler diagnostics.

use std::fmt;

use crate::lexer::{Token, TokenKind};

/// Where in the token stream a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// At an ordinary token, carrying its lexeme
    Lexeme(String),
    /// At the end of the source
    End,
    /// A lexical error token; its message already says what went wrong
    Unspecified,
}

/// A single reported error.
///
/// Displays as `[line <n>] Error<location>: <message>`, which tools that read
/// compiler output rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Source line of the offending token
    pub line: u32,
    /// Token the error points at
    pub location: Location,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Builds a diagnostic pointing at `token`.
    pub fn at(token: &Token<'_>, message: impl Into<String>) -> Self {
        let location = match token.kind {
            TokenKind::Eof => Location::End,
            TokenKind::Error => Location::Unspecified,
            _ => Location::Lexeme(token.lexeme.to_owned()),
        };
        Self {
            line: token.line,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error", self.line)?;
        match &self.location {
            Location::Lexeme(lexeme) => write!(f, " at '{lexeme}'")?,
            Location::End => f.write_str(" at end")?,
            Location::Unspecified => {}
        }
        write!(f, ": {}", self.message)
    }
}
