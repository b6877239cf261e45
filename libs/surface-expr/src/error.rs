//! # Expression Errors
//!
//! Parse errors carry the byte span of the offending token. Evaluation
//! errors describe why a single sample could not produce a finite value.

use thiserror::Error;

use crate::span::Span;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
///
/// ## Example
///
/// ```rust
/// use surface_expr::ParseError;
///
/// let error = ParseError::unexpected_token(")", "expression");
/// assert!(error.to_string().contains("unexpected token ')'"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at byte {}", .span.start)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create unexpected end of input error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Replace the span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Found a token the grammar does not allow here.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Input ended early.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// Number literal that does not fit an f64.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Identifier that is neither a variable, a constant nor a function.
    #[error("unknown identifier '{name}'")]
    UnknownIdentifier {
        /// The identifier.
        name: String,
    },

    /// Function name used without a parenthesized argument.
    #[error("function '{name}' must be called with one argument")]
    MissingArgument {
        /// The function name.
        name: String,
    },

    /// Parentheses or prefix operators nested beyond the parser limit.
    #[error("expression nested deeper than {limit} levels")]
    TooDeep {
        /// Configured nesting limit.
        limit: usize,
    },
}

// =============================================================================
// EVAL ERROR
// =============================================================================

/// Errors that can occur while evaluating one sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Division (or negative power) of zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Function argument outside the function's domain.
    #[error("Domain error: {function}({argument})")]
    Domain {
        /// Function name.
        function: &'static str,
        /// Offending argument.
        argument: f64,
    },

    /// An operation produced NaN or infinity.
    #[error("Non-finite result from '{operation}'")]
    NonFinite {
        /// Operator symbol or function name.
        operation: &'static str,
    },
}

// =============================================================================
// COMBINED ERROR
// =============================================================================

/// Either failure of a one-shot parse-and-evaluate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Source did not parse.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Sample did not evaluate.
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_eof_display() {
        let error = ParseError::unexpected_eof("')'");
        let msg = error.to_string();
        assert!(msg.contains("unexpected end of input"));
        assert!(msg.contains("')'"));
    }

    #[test]
    fn test_error_with_span() {
        let error = ParseError::unexpected_token("x", "y").with_span(Span::from_bytes(10, 11));
        assert_eq!(error.span.start, 10);
        assert!(error.to_string().ends_with("at byte 10"));
    }

    #[test]
    fn test_eval_error_display() {
        let err = EvalError::Domain {
            function: "sqrt",
            argument: -4.0,
        };
        assert_eq!(err.to_string(), "Domain error: sqrt(-4)");
    }
}
