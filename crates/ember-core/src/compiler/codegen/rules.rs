//! The Pratt rule table.
//!
//! Every token kind maps to an optional prefix rule, an optional infix rule
//! and the binding precedence of the token when it appears as an infix
//! operator. The table is an exhaustive `match`, so adding a token kind
//! without deciding its rule is a compile error.

use crate::lexer::TokenKind;

/// Binding strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Not an operator
    None,
    /// `=`
    Assignment,
    /// `or`
    Or,
    /// `and`
    And,
    /// `==` `!=`
    Equality,
    /// `<` `>` `<=` `>=`
    Comparison,
    /// `+` `-`
    Term,
    /// `*` `/`
    Factor,
    /// `!` `-`
    Unary,
    /// `.` `()`
    Call,
    /// Literals and groupings
    Primary,
}

impl Precedence {
    /// The next tighter level. `Primary` is its own successor.
    pub const fn next(self) -> Self {
        match self {
            Precedence::None => Precedence::Assignment,
            Precedence::Assignment => Precedence::Or,
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Equality,
            Precedence::Equality => Precedence::Comparison,
            Precedence::Comparison => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary => Precedence::Call,
            Precedence::Call | Precedence::Primary => Precedence::Primary,
        }
    }
}

/// Handlers for a token that starts an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// `( expression )`
    Grouping,
    /// `- operand`
    Unary,
    /// Numeric literal
    Number,
}

/// Handlers for a token that continues an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixRule {
    /// `left op right`
    Binary,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    /// Rule applied when the token starts an expression
    pub prefix: Option<PrefixRule>,
    /// Rule applied when the token follows a complete operand
    pub infix: Option<InfixRule>,
    /// Binding precedence as an infix operator
    pub precedence: Precedence,
}

impl ParseRule {
    const fn new(
        prefix: Option<PrefixRule>,
        infix: Option<InfixRule>,
        precedence: Precedence,
    ) -> Self {
        Self {
            prefix,
            infix,
            precedence,
        }
    }

    const EMPTY: ParseRule = ParseRule::new(None, None, Precedence::None);
}

/// Returns the rule for `kind`.
pub const fn rule(kind: TokenKind) -> ParseRule {
    use InfixRule::Binary;
    use PrefixRule::{Grouping, Number, Unary};

    match kind {
        TokenKind::LeftParen => ParseRule::new(Some(Grouping), None, Precedence::None),
        TokenKind::Minus => ParseRule::new(Some(Unary), Some(Binary), Precedence::Term),
        TokenKind::Plus => ParseRule::new(None, Some(Binary), Precedence::Term),
        TokenKind::Slash | TokenKind::Star => {
            ParseRule::new(None, Some(Binary), Precedence::Factor)
        }
        TokenKind::Number => ParseRule::new(Some(Number), None, Precedence::None),

        TokenKind::RightParen
        | TokenKind::LeftBrace
        | TokenKind::RightBrace
        | TokenKind::Comma
        | TokenKind::Dot
        | TokenKind::Semicolon
        | TokenKind::Bang
        | TokenKind::BangEqual
        | TokenKind::Equal
        | TokenKind::EqualEqual
        | TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Less
        | TokenKind::LessEqual
        | TokenKind::Identifier
        | TokenKind::String
        | TokenKind::And
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
        | TokenKind::Error
        | TokenKind::Eof => ParseRule::EMPTY,
    }
}
