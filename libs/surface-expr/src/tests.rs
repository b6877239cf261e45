//! End-to-end tests: source text in, sample values out.

use approx::assert_relative_eq;

use super::*;

#[test]
fn test_paraboloid() {
    let expr = Expression::parse("x**2 + y**2").unwrap();
    assert_relative_eq!(expr.eval(1.0, -1.0).unwrap(), 2.0);
    assert_relative_eq!(expr.eval(0.0, 0.0).unwrap(), 0.0);
}

#[test]
fn test_sinc_with_numpy_prefixes() {
    let expr =
        Expression::parse("np.sin(np.sqrt(x**2 + y**2)) / (np.sqrt(x**2 + y**2) + 1e-8)").unwrap();
    // Near the origin the guard term keeps the value finite
    assert_relative_eq!(expr.eval(0.0, 0.0).unwrap(), 0.0);
    let r = 2.0_f64.sqrt();
    assert_relative_eq!(expr.eval(1.0, 1.0).unwrap(), r.sin() / (r + 1e-8), epsilon = 1e-12);
}

#[test]
fn test_python_precedence() {
    assert_relative_eq!(evaluate("-2**2", 0.0, 0.0).unwrap(), -4.0);
    assert_relative_eq!(evaluate("2**3**2", 0.0, 0.0).unwrap(), 512.0);
    assert_relative_eq!(evaluate("2**-1", 0.0, 0.0).unwrap(), 0.5);
    assert_relative_eq!(evaluate("10 - 4 - 3", 0.0, 0.0).unwrap(), 3.0);
    assert_relative_eq!(evaluate("12 / 3 / 2", 0.0, 0.0).unwrap(), 2.0);
    assert_relative_eq!(evaluate("(1 + 2) * 3", 0.0, 0.0).unwrap(), 9.0);
}

#[test]
fn test_domain_error_is_per_sample() {
    let expr = Expression::parse("sqrt(x)").unwrap();
    assert!(expr.eval(-1.0, 0.0).is_err());
    assert_relative_eq!(expr.eval(4.0, 0.0).unwrap(), 2.0);
}

#[test]
fn test_evaluate_reports_parse_errors() {
    assert!(matches!(evaluate("x +", 0.0, 0.0), Err(ExprError::Parse(_))));
    assert!(matches!(
        evaluate("1 / y", 0.0, 0.0),
        Err(ExprError::Eval(EvalError::DivisionByZero))
    ));
}

#[test]
fn test_from_str_and_display() {
    let expr: Expression = "sin(x) * cos(y)".parse().unwrap();
    assert_eq!(expr.to_string(), "sin(x) * cos(y)");
    assert_eq!(expr.source(), "sin(x) * cos(y)");
    assert!(expr.root().uses_variables());
}

#[test]
fn test_constant_expression() {
    let expr = Expression::parse("2 * pi").unwrap();
    assert!(!expr.root().uses_variables());
    assert_relative_eq!(expr.eval(5.0, 5.0).unwrap(), std::f64::consts::TAU);
}

#[test]
fn test_expression_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();
}
