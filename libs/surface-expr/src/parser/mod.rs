//! # Expression Parser
//!
//! Recursive descent parser for surface expressions.
//! Produces an [`Expr`] tree.
//!
//! ## Module Structure
//!
//! - `operators` - Binary, unary and power operators with precedence
//! - `primaries` - Literals, variables, constants, calls, parentheses
//!
//! ## Example
//!
//! ```rust
//! use surface_expr::lexer::Lexer;
//! use surface_expr::parser::Parser;
//!
//! let tokens = Lexer::new("x + y").tokenize();
//! let expr = Parser::new(tokens).parse().unwrap();
//! assert!(expr.uses_variables());
//! ```

mod operators;
mod primaries;

use config::constants::MAX_EXPRESSION_DEPTH;

use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a token stream.
pub struct Parser {
    /// Token stream, terminated by `Eof`.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Current nesting depth.
    depth: usize,
    /// Nesting limit.
    max_depth: usize,
}

impl Parser {
    /// Create a new parser with the default nesting limit.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, MAX_EXPRESSION_DEPTH)
    }

    /// Create a parser with an explicit nesting limit.
    pub fn with_max_depth(mut tokens: Vec<Token>, max_depth: usize) -> Self {
        if tokens.last().map_or(true, |t| !t.is_eof()) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(
                TokenKind::Eof,
                crate::span::Span::from_bytes(end, end),
                "",
            ));
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parse the whole token stream as one expression.
    ///
    /// Trailing tokens after a complete expression are an error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.peek().is_eof() {
            return Err(ParseError::unexpected_eof("expression").with_span(self.peek().span));
        }

        let expr = self.parse_expression()?;

        if !self.peek().is_eof() {
            let token = self.peek();
            return Err(
                ParseError::unexpected_token(&token.text, "operator or end of input")
                    .with_span(token.span),
            );
        }

        Ok(expr)
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token. The stream always ends with `Eof`, which is
    /// returned for any position past the end.
    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.current.min(last)]
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Get the kind `n` tokens ahead.
    fn peek_kind_at(&self, n: usize) -> TokenKind {
        let last = self.tokens.len() - 1;
        self.tokens[(self.current + n).min(last)].kind
    }

    /// Consume and return current token.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.current += 1;
        }
        token
    }

    /// Consume a token of the given kind or fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.peek();
        if token.kind == kind {
            return Ok(self.advance());
        }
        let error = if token.is_eof() {
            ParseError::unexpected_eof(kind.describe())
        } else {
            ParseError::unexpected_token(&token.text, kind.describe())
        };
        Err(error.with_span(token.span))
    }

    // =========================================================================
    // DEPTH GUARD
    // =========================================================================

    /// Run `parse` one nesting level deeper, failing past the limit.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::TooDeep {
                    limit: self.max_depth,
                },
                self.peek().span,
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
