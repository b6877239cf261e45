//! # Tokens
//!
//! Token types for the expression lexer.

use crate::span::Span;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// ## Example
///
/// ```rust
/// use surface_expr::lexer::{Token, TokenKind};
/// use surface_expr::Span;
///
/// let token = Token::new(TokenKind::Number, Span::from_bytes(0, 3), "1.5");
/// assert_eq!(token.text, "1.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// Check if token is end of input.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Number literal like `2`, `0.5` or `1e-8`
    Number,
    /// Identifier like `x`, `sin` or `np`
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `**`
    StarStar,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.` (namespace separator in `np.sin`)
    Dot,
    /// Character outside the grammar
    Error,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Human-readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::StarStar => "'**'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Dot => "'.'",
            Self::Error => "invalid character",
            Self::Eof => "end of input",
        }
    }
}
