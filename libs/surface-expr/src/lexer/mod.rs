//! # Expression Lexer
//!
//! Tokenizes surface expressions such as `sin(x) * cos(y)`.
//!
//! ## Example
//!
//! ```rust
//! use surface_expr::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("x**2").tokenize();
//! assert_eq!(tokens[1].kind, TokenKind::StarStar);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::span::Span;

// =============================================================================
// LEXER
// =============================================================================

/// Expression lexer.
///
/// Converts source text into a stream of tokens terminated by `Eof`.
/// Characters outside the grammar become `Error` tokens; the parser
/// reports them.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens including the trailing EOF token.
    pub fn tokenize(mut self) -> Vec<Token> {
        loop {
            self.cursor.advance_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token();
        }

        let end = self.cursor.offset();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::from_bytes(end, end), ""));
        self.tokens
    }

    /// Scan a single token.
    fn scan_token(&mut self) {
        let start = self.cursor.offset();
        let Some(c) = self.cursor.advance() else {
            return;
        };

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '*' => {
                if self.cursor.peek() == Some('*') {
                    self.cursor.advance();
                    TokenKind::StarStar
                } else {
                    TokenKind::Star
                }
            }
            '.' if self.cursor.peek().is_some_and(|n| n.is_ascii_digit()) => {
                self.scan_number_tail();
                TokenKind::Number
            }
            '.' => TokenKind::Dot,
            c if c.is_ascii_digit() => {
                self.cursor.advance_while(|c| c.is_ascii_digit());
                if self.cursor.peek() == Some('.') {
                    self.cursor.advance();
                }
                self.scan_number_tail();
                TokenKind::Number
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.cursor
                    .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::Identifier
            }
            _ => TokenKind::Error,
        };

        let text = self.cursor.slice_from(start);
        self.tokens.push(Token::new(
            kind,
            Span::from_bytes(start, self.cursor.offset()),
            text,
        ));
    }

    /// Scan fractional digits and an optional exponent.
    fn scan_number_tail(&mut self) {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            let signed = matches!(self.cursor.peek_nth(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            // `2e` stays `2` followed by the identifier `e`
            if self
                .cursor
                .peek_nth(digit_at)
                .is_some_and(|c| c.is_ascii_digit())
            {
                for _ in 0..digit_at {
                    self.cursor.advance();
                }
                self.cursor.advance_while(|c| c.is_ascii_digit());
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
