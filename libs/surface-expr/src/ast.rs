//! # Expression AST
//!
//! The parsed form of a surface expression. Every node is plain data, so a
//! parsed expression is `Send + Sync` and can be sampled from many threads.

use crate::functions::Function;

/// A parsed expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal or resolved constant (`pi`, `e`).
    Number(f64),
    /// One of the two bound sample variables.
    Variable(Variable),
    /// Prefix operator applied to an operand.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// Infix operator.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Call to a whitelisted single-argument function.
    Call {
        /// Function being called.
        function: Function,
        /// Its argument.
        argument: Box<Expr>,
    },
}

impl Expr {
    pub(crate) fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub(crate) fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub(crate) fn call(function: Function, argument: Expr) -> Self {
        Self::Call {
            function,
            argument: Box::new(argument),
        }
    }

    /// True if the expression references `x` or `y`.
    pub fn uses_variables(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Variable(_) => true,
            Self::Unary { operand, .. } => operand.uses_variables(),
            Self::Binary { left, right, .. } => left.uses_variables() || right.uses_variables(),
            Self::Call { argument, .. } => argument.uses_variables(),
        }
    }
}

/// Sample variables bound during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// First grid coordinate.
    X,
    /// Second grid coordinate.
    Y,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-a`
    Negate,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a ** b`
    Power,
}

impl BinaryOp {
    /// Operator symbol as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }
}
