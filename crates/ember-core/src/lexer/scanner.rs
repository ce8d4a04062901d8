//! The scanner that produces tokens from source text.

use super::{Span, Token, TokenKind};

/// A scanner that tokenizes Ember source code.
///
/// The scanner works in place over the source buffer and hands out one token
/// per call to [`Scanner::scan_token`]. It only ever moves forward.
pub struct Scanner<'src> {
    source: &'src str,
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    start: usize,
    current: usize,
    line: u32,
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner positioned at the start of `source`, line 1.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Returns the line the scanner is currently on.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the next token from the source.
    ///
    /// Once the end of the source is reached every further call returns an
    /// [`TokenKind::Eof`] token.
    pub fn scan_token(&mut self) -> Token<'src> {
        self.skip_whitespace();
        self.start = self.current;

        let Some(ch) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        if is_alpha(ch) {
            return self.scan_identifier();
        }
        if ch.is_ascii_digit() {
            return self.scan_number();
        }

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Star,
            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '"' => return self.scan_string(),
            _ => return self.error_token("unexpected character."),
        };

        self.make_token(kind)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.current = pos + ch.len_utf8();
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    /// Consumes `expected` if it is the next character.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn either(&mut self, expected: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.matches(expected) { matched } else { single }
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        let span = Span::new(self.start, self.current);
        Token::new(kind, &self.source[self.start..self.current], span, self.line)
    }

    fn error_token(&self, message: &'static str) -> Token<'src> {
        Token::error(message, Span::new(self.start, self.current), self.line)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\r' | '\t') => {
                    self.advance();
                }
                Some('\n') => {
                    self.line += 1;
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    // The newline is left for the next iteration so it is counted.
                    while let Some(ch) = self.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_identifier(&mut self) -> Token<'src> {
        while let Some(ch) = self.peek() {
            if is_alpha(ch) || ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[self.start..self.current];
        self.make_token(TokenKind::keyword(text).unwrap_or(TokenKind::Identifier))
    }

    fn scan_number(&mut self) -> Token<'src> {
        self.skip_digits();

        // A trailing '.' belongs to the number only when digits follow it.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
            self.skip_digits();
        }

        self.make_token(TokenKind::Number)
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn scan_string(&mut self) -> Token<'src> {
        loop {
            match self.advance() {
                None => return self.error_token("Unterminated string."),
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => {}
            }
        }

        self.make_token(TokenKind::String)
    }
}

/// Checks if a character can start an identifier.
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.scan_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
