//! # Expression Evaluation
//!
//! Walks an [`Expr`] tree for one `(x, y)` sample. Every intermediate value
//! must stay finite; the first NaN or infinity aborts the sample with an
//! [`EvalError`] so callers can substitute a fallback height.

use crate::ast::{BinaryOp, Expr, UnaryOp, Variable};
use crate::error::EvalError;

/// Evaluates an expression at one sample point.
pub fn eval_expr(expr: &Expr, x: f64, y: f64) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Variable(Variable::X) => Ok(x),
        Expr::Variable(Variable::Y) => Ok(y),
        Expr::Unary { op, operand } => {
            let v = eval_expr(operand, x, y)?;
            Ok(match op {
                UnaryOp::Negate => -v,
            })
        }
        Expr::Binary { op, left, right } => {
            let l = eval_expr(left, x, y)?;
            let r = eval_expr(right, x, y)?;
            eval_binary_op(*op, l, r)
        }
        Expr::Call { function, argument } => {
            let a = eval_expr(argument, x, y)?;
            let value = function.apply(a)?;
            finite(value, function.name())
        }
    }
}

fn eval_binary_op(op: BinaryOp, l: f64, r: f64) -> Result<f64, EvalError> {
    let value = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Subtract => l - r,
        BinaryOp::Multiply => l * r,
        BinaryOp::Divide => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l / r
        }
        BinaryOp::Power => {
            if l == 0.0 && r < 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l.powf(r)
        }
    };
    finite(value, op.symbol())
}

fn finite(value: f64, operation: &'static str) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Function;
    use approx::assert_relative_eq;

    fn bin(op: BinaryOp, l: f64, r: f64) -> Expr {
        Expr::binary(op, Expr::Number(l), Expr::Number(r))
    }

    #[test]
    fn test_variables_bind() {
        assert_eq!(eval_expr(&Expr::Variable(Variable::X), 2.0, 3.0), Ok(2.0));
        assert_eq!(eval_expr(&Expr::Variable(Variable::Y), 2.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            eval_expr(&bin(BinaryOp::Divide, 1.0, 0.0), 0.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            eval_expr(&bin(BinaryOp::Power, 0.0, -1.0), 0.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_fractional_power_of_negative_is_nonfinite() {
        let result = eval_expr(&bin(BinaryOp::Power, -8.0, 1.0 / 3.0), 0.0, 0.0);
        assert_eq!(result, Err(EvalError::NonFinite { operation: "**" }));
    }

    #[test]
    fn test_overflow_is_nonfinite() {
        let expr = Expr::call(Function::Exp, Expr::Number(1000.0));
        assert_eq!(
            eval_expr(&expr, 0.0, 0.0),
            Err(EvalError::NonFinite { operation: "exp" })
        );
    }

    #[test]
    fn test_call_evaluates_argument() {
        let expr = Expr::call(Function::Cos, Expr::Variable(Variable::Y));
        assert_relative_eq!(eval_expr(&expr, 0.0, 0.0).unwrap(), 1.0);
    }
}
