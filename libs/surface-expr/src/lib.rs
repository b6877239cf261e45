//! # Surface Expressions
//!
//! A small, closed expression language for height fields `z = f(x, y)`.
//! Source text is tokenized, parsed by a recursive-descent parser into an
//! [`Expr`] tree and evaluated against a fixed set of operators and
//! whitelisted functions. Nothing in the source can reach host code.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Expr → eval(x, y)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use surface_expr::Expression;
//!
//! let expr = Expression::parse("x**2 + y**2").unwrap();
//! assert_eq!(expr.eval(3.0, 4.0).unwrap(), 25.0);
//!
//! // Domain failures are reported per sample, never panics.
//! let inverse = Expression::parse("1 / x").unwrap();
//! assert!(inverse.eval(0.0, 0.0).is_err());
//! ```

pub mod ast;
pub mod error;
pub mod eval;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod span;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

pub use ast::{BinaryOp, Expr, UnaryOp, Variable};
pub use error::{EvalError, ExprError, ParseError, ParseErrorKind};
pub use functions::Function;
pub use span::Span;

// =============================================================================
// PUBLIC API
// =============================================================================

/// A parsed surface expression, ready to be sampled.
///
/// Parsing happens once; [`Expression::eval`] is cheap and thread-safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Original source text.
    source: String,
    /// Parsed tree.
    root: Expr,
}

impl Expression {
    /// Parse source text.
    ///
    /// ## Errors
    ///
    /// Returns a [`ParseError`] naming the offending byte offset for
    /// unknown identifiers, unsupported syntax, or nesting beyond
    /// [`config::constants::MAX_EXPRESSION_DEPTH`].
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = lexer::Lexer::new(source).tokenize();
        let root = parser::Parser::new(tokens).parse().inspect_err(|e| {
            debug!(source, error = %e, "rejected surface expression");
        })?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Evaluate at one sample point.
    ///
    /// ## Errors
    ///
    /// Division by zero, a function argument outside its domain, or any
    /// non-finite intermediate value.
    pub fn eval(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        eval::eval_expr(&self.root, x, y)
    }

    /// The source text this expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse and evaluate in one step.
///
/// ## Example
///
/// ```rust
/// use surface_expr::evaluate;
///
/// assert_eq!(evaluate("2 * x + y", 1.0, 1.0).unwrap(), 3.0);
/// ```
pub fn evaluate(source: &str, x: f64, y: f64) -> Result<f64, ExprError> {
    Ok(Expression::parse(source)?.eval(x, y)?)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests;
