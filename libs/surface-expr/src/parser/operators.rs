//! # Operator Parsing
//!
//! Parses binary and unary operators using precedence climbing.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | + - | Left |
//! | 2 | * / | Left |
//! | 3 | - + (unary) | Right |
//! | 4 | ** | Right |
//!
//! `**` binds tighter than a unary minus on its left and looser than one
//! on its right: `-x**2` is `-(x**2)` and `2**-1` is `2**(-1)`.

use super::Parser;
use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::ParseError;
use crate::lexer::TokenKind;

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Binary operator precedence levels handled by the climbing loop.
///
/// Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// Addition/subtraction: `+ -`
    Term = 1,
    /// Multiplication/division: `* /`
    Factor = 2,
    /// Prefix operators and everything tighter
    Unary = 3,
}

impl Precedence {
    /// Get precedence for binary operator.
    pub(super) fn of_binary(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus | TokenKind::Minus => Some(Self::Term),
            TokenKind::Star | TokenKind::Slash => Some(Self::Factor),
            _ => None,
        }
    }

    /// Get next higher precedence level.
    ///
    /// Used for left-associative operators.
    pub(super) fn next(self) -> Self {
        match self {
            Self::Term => Self::Factor,
            Self::Factor | Self::Unary => Self::Unary,
        }
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Subtract),
        TokenKind::Star => Some(BinaryOp::Multiply),
        TokenKind::Slash => Some(BinaryOp::Divide),
        _ => None,
    }
}

// =============================================================================
// OPERATOR PARSING
// =============================================================================

impl Parser {
    /// Parse an expression at the loosest precedence.
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_precedence(Precedence::Term)
    }

    /// Parse expression with minimum precedence.
    fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(prec) = Precedence::of_binary(self.peek_kind()) {
            if prec < min_prec {
                break;
            }
            let Some(op) = binary_op(self.advance().kind) else {
                break;
            };
            let right = self.parse_precedence(prec.next())?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `-` / `+`, then a power expression.
    pub(super) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            TokenKind::Minus => {
                self.advance();
                let operand = self.nested(Self::parse_unary)?;
                Ok(Expr::unary(UnaryOp::Negate, operand))
            }
            TokenKind::Plus => {
                self.advance();
                self.nested(Self::parse_unary)
            }
            _ => self.parse_power(),
        }
    }

    /// Parse `primary ("**" unary)?`. The exponent recurses through
    /// `parse_unary`, which makes `**` right-associative.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;

        if self.peek_kind() == TokenKind::StarStar {
            self.advance();
            let exponent = self.nested(Self::parse_unary)?;
            return Ok(Expr::binary(BinaryOp::Power, base, exponent));
        }

        Ok(base)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOp, Expr, UnaryOp, Variable};
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse(source: &str) -> Expr {
        Parser::new(Lexer::new(source).tokenize())
            .parse()
            .unwrap_or_else(|e| panic!("{source}: {e}"))
    }

    fn num(n: f64) -> Expr {
        Expr::Number(n)
    }

    #[test]
    fn test_precedence_mul_over_add() {
        assert_eq!(
            parse("1 + 2 * 3"),
            Expr::binary(
                BinaryOp::Add,
                num(1.0),
                Expr::binary(BinaryOp::Multiply, num(2.0), num(3.0))
            )
        );
    }

    #[test]
    fn test_subtraction_left_associative() {
        assert_eq!(
            parse("8 - 4 - 2"),
            Expr::binary(
                BinaryOp::Subtract,
                Expr::binary(BinaryOp::Subtract, num(8.0), num(4.0)),
                num(2.0)
            )
        );
    }

    #[test]
    fn test_power_right_associative() {
        assert_eq!(
            parse("2 ** 3 ** 2"),
            Expr::binary(
                BinaryOp::Power,
                num(2.0),
                Expr::binary(BinaryOp::Power, num(3.0), num(2.0))
            )
        );
    }

    #[test]
    fn test_negation_binds_looser_than_power() {
        assert_eq!(
            parse("-x**2"),
            Expr::unary(
                UnaryOp::Negate,
                Expr::binary(BinaryOp::Power, Expr::Variable(Variable::X), num(2.0))
            )
        );
    }

    #[test]
    fn test_negative_exponent() {
        assert_eq!(
            parse("2**-1"),
            Expr::binary(BinaryOp::Power, num(2.0), Expr::unary(UnaryOp::Negate, num(1.0)))
        );
    }

    #[test]
    fn test_unary_plus_is_transparent() {
        assert_eq!(parse("+x"), Expr::Variable(Variable::X));
    }

    #[test]
    fn test_dangling_operator() {
        let tokens = Lexer::new("x *").tokenize();
        assert!(Parser::new(tokens).parse().is_err());
    }
}
