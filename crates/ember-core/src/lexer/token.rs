//! Token definitions for the Ember lexer.

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by the scanner.
///
/// Tokens borrow their lexeme from the source buffer and never own memory.
/// For [`TokenKind::Error`] tokens the lexeme is a static diagnostic message
/// instead of source text; the span still points at the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of the token, or the message of an error token
    pub lexeme: &'src str,
    /// The span in the source code
    pub span: Span,
    /// 1-based source line the token ends on
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            span,
            line,
        }
    }

    /// Creates an error token carrying a static diagnostic message.
    pub fn error(message: &'static str, span: Span, line: u32) -> Self {
        Self::new(TokenKind::Error, message, span, line)
    }

    /// Placeholder used before the first token has been scanned.
    pub(crate) fn synthetic() -> Self {
        Self::new(TokenKind::Eof, "", Span::default(), 1)
    }
}

/// The lexical categories of Ember.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// -
    Minus,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// /
    Slash,
    /// *
    Star,

    // One or two character operators
    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal, quotes included in the lexeme
    String,
    /// Numeric literal, parsed by the compiler
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// Lexical error; the lexeme holds the message
    Error,
    /// End of source
    Eof,
}

impl TokenKind {
    /// Looks up the keyword spelled exactly by `ident`.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let kind = match ident {
            "and" => TokenKind::And,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "fun" => TokenKind::Fun,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true if this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}
