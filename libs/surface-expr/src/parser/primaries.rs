//! # Primary Expression Parsing
//!
//! Parses primary expressions: numbers, the sample variables, named
//! constants, whitelisted function calls and parenthesized expressions.
//!
//! ## Grammar
//!
//! ```text
//! primary = number | name | name "(" expression ")" | "(" expression ")"
//! name    = [("np" | "math") "."] identifier
//! ```
//!
//! The `np.` / `math.` prefixes are accepted and ignored so expressions
//! written against those namespaces parse unchanged.

use std::f64::consts::{E, PI};

use super::Parser;
use crate::ast::{Expr, Variable};
use crate::error::{ParseError, ParseErrorKind};
use crate::functions::Function;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

/// Namespaces accepted before a function or constant name.
const NAMESPACES: [&str; 2] = ["np", "math"];

impl Parser {
    /// Parse primary expression.
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                parse_number(&token)
            }

            TokenKind::Identifier => self.parse_name(),

            TokenKind::LParen => {
                self.advance();
                let expr = self.nested(Self::parse_expression)?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }

            TokenKind::Eof => Err(ParseError::unexpected_eof("expression").with_span(token.span)),

            _ => Err(ParseError::unexpected_token(&token.text, "expression").with_span(token.span)),
        }
    }

    /// Parse a possibly namespaced name: variable, constant or call.
    fn parse_name(&mut self) -> Result<Expr, ParseError> {
        let first = self.advance();

        let (name, span, namespaced) = if NAMESPACES.contains(&first.text.as_str())
            && self.peek_kind() == TokenKind::Dot
            && self.peek_kind_at(1) == TokenKind::Identifier
        {
            self.advance();
            let member = self.advance();
            let span = Span::from_bytes(first.span.start, member.span.end);
            (member.text, span, true)
        } else {
            (first.text, first.span, false)
        };

        if let Some(function) = Function::from_name(&name) {
            if self.peek_kind() != TokenKind::LParen {
                return Err(ParseError::new(ParseErrorKind::MissingArgument { name }, span));
            }
            self.advance();
            let argument = self.nested(Self::parse_expression)?;
            self.expect(TokenKind::RParen)?;
            return Ok(Expr::call(function, argument));
        }

        match name.as_str() {
            "pi" => Ok(Expr::Number(PI)),
            "e" => Ok(Expr::Number(E)),
            // Sample variables are never namespaced.
            "x" if !namespaced => Ok(Expr::Variable(Variable::X)),
            "y" if !namespaced => Ok(Expr::Variable(Variable::Y)),
            _ => Err(ParseError::new(ParseErrorKind::UnknownIdentifier { name }, span)),
        }
    }
}

fn parse_number(token: &Token) -> Result<Expr, ParseError> {
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Expr::Number(value)),
        _ => Err(ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: token.text.clone(),
            },
            token.span,
        )),
    }
}

// =============================================================================
// TESTS
// =============================================================================
