//! Single-pass code generation from tokens to bytecode.
//!
//! This module contains the `Parser`, a Pratt (precedence climbing) parser
//! that pulls tokens from the [`Scanner`] and writes instructions straight
//! into a [`Chunk`]. No syntax tree is built; operands are emitted before
//! their operator, which is the order a stack machine consumes them in.

mod diagnostic;
mod rules;


pub use diagnostic::{Diagnostic, Location};
pub use rules::{InfixRule, ParseRule, Precedence, PrefixRule, rule};

use tracing::{debug, info, trace, warn};

use crate::Error;
use crate::compiler::bytecode::{Chunk, OpCode};
use crate::compiler::disasm::disassemble_chunk;
use crate::config::CompilerOptions;
use crate::lexer::{Scanner, Token, TokenKind};
use crate::runtime::value::Value;

/// What a finished compilation reports besides the chunk contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutcome {
    /// True once any error was detected, reported or not
    pub had_error: bool,
    /// Errors reported before panic mode silenced the rest
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutcome {
    /// Converts the outcome into the crate's `Result` convention.
    pub fn into_result(self) -> Result<(), Error> {
        if self.had_error {
            Err(Error::Compile(self.diagnostics))
        } else {
            Ok(())
        }
    }
}

/// Compilation context for one expression.
///
/// Owns the scanner and the one-token lookahead, and borrows the chunk being
/// written for as long as it lives.
pub struct Parser<'src, 'chunk> {
    scanner: Scanner<'src>,
    chunk: &'chunk mut Chunk,
    options: CompilerOptions,
    /// Lookahead token
    current: Token<'src>,
    /// Most recently consumed token
    previous: Token<'src>,
    had_error: bool,
    panic_mode: bool,
    depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'src, 'chunk> Parser<'src, 'chunk> {
    /// Creates a parser that compiles `source` into `chunk`.
    pub fn new(source: &'src str, chunk: &'chunk mut Chunk, options: CompilerOptions) -> Self {
        Self {
            scanner: Scanner::new(source),
            chunk,
            options,
            current: Token::synthetic(),
            previous: Token::synthetic(),
            had_error: false,
            panic_mode: false,
            depth: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Compiles a single expression followed by end of source.
    ///
    /// A `Return` is always appended, even after errors; a chunk from a
    /// failed compilation must not be executed.
    pub fn compile(mut self) -> CompileOutcome {
        debug!(start_len = self.chunk.len(), "compiling expression");

        self.advance();
        self.expression();
        self.consume(TokenKind::Eof, "Expect end of expression.");
        self.end_compiler();

        debug!(
            bytes = self.chunk.len(),
            constants = self.chunk.constants().len(),
            had_error = self.had_error,
            "compilation finished"
        );

        CompileOutcome {
            had_error: self.had_error,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Token stream
    // ========================================================================

    fn advance(&mut self) {
        self.previous = self.current;

        loop {
            self.current = self.scanner.scan_token();
            trace!(kind = ?self.current.kind, lexeme = self.current.lexeme, line = self.current.line, "token");
            if self.current.kind != TokenKind::Error {
                break;
            }
            self.error_at_current(self.current.lexeme);
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) {
        if self.current.kind == kind {
            self.advance();
            return;
        }
        self.error_at_current(message);
    }

    // ========================================================================
    // Error reporting
    // ========================================================================

    fn error_at_current(&mut self, message: &str) {
        let token = self.current;
        self.error_at(&token, message);
    }

    fn error(&mut self, message: &str) {
        let token = self.previous;
        self.error_at(&token, message);
    }

    fn error_at(&mut self, token: &Token<'src>, message: &str) {
        // Panic mode is never cleared: expressions have no statement boundary
        // to resynchronize on.
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;

        let diagnostic = Diagnostic::at(token, message);
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    // ========================================================================
    // Emission
    // ========================================================================

    fn emit_byte(&mut self, byte: u8) {
        self.chunk.write(byte, self.previous.line);
    }

    fn emit_op(&mut self, op: OpCode) {
        self.emit_byte(op.into());
    }

    fn emit_constant(&mut self, value: Value) {
        let index = self.make_constant(value);
        self.emit_op(OpCode::Constant);
        self.emit_byte(index);
    }

    fn make_constant(&mut self, value: Value) -> u8 {
        match self.chunk.add_constant(value) {
            Ok(index) => index,
            Err(err) => {
                self.error(&err.to_string());
                0
            }
        }
    }

    fn end_compiler(&mut self) {
        self.emit_op(OpCode::Return);

        if self.options.print_code && !self.had_error {
            info!("\n{}", disassemble_chunk(self.chunk, "code"));
        }
    }

    // ========================================================================
    // Precedence climbing
    // ========================================================================

    fn expression(&mut self) {
        self.parse_precedence(Precedence::Assignment);
    }

    fn parse_precedence(&mut self, precedence: Precedence) {
        if self.depth >= self.options.max_nesting_depth {
            self.error_at_current("Expression nesting too deep.");
            return;
        }
        self.depth += 1;

        self.advance();
        match rule(self.previous.kind).prefix {
            Some(prefix) => {
                self.apply_prefix(prefix);

                while precedence <= rule(self.current.kind).precedence {
                    self.advance();
                    if let Some(infix) = rule(self.previous.kind).infix {
                        self.apply_infix(infix);
                    }
                }
            }
            None => self.error("Expect expression."),
        }

        self.depth -= 1;
    }

    fn apply_prefix(&mut self, prefix: PrefixRule) {
        match prefix {
            PrefixRule::Grouping => self.grouping(),
            PrefixRule::Unary => self.unary(),
            PrefixRule::Number => self.number(),
        }
    }

    fn apply_infix(&mut self, infix: InfixRule) {
        match infix {
            InfixRule::Binary => self.binary(),
        }
    }

    fn grouping(&mut self) {
        self.expression();
        self.consume(TokenKind::RightParen, "Expect ')' after expression.");
    }

    fn unary(&mut self) {
        let operator = self.previous.kind;

        self.parse_precedence(Precedence::Unary);

        if operator == TokenKind::Minus {
            self.emit_op(OpCode::Negate);
        }
    }

    fn binary(&mut self) {
        let operator = self.previous.kind;
        // One level tighter on the right makes every operator left-associative.
        self.parse_precedence(rule(operator).precedence.next());

        let op = match operator {
            TokenKind::Plus => OpCode::Add,
            TokenKind::Minus => OpCode::Subtract,
            TokenKind::Star => OpCode::Multiply,
            TokenKind::Slash => OpCode::Divide,
            _ => return,
        };
        self.emit_op(op);
    }

    fn number(&mut self) {
        match self.previous.lexeme.parse::<f64>() {
            Ok(n) => self.emit_constant(Value::Number(n)),
            Err(_) => self.error("Invalid number literal."),
        }
    }
}
