use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    token::Operator,
};

/// Applies a binary operator to `a` (left-hand side) and `b` (right-hand
/// side).
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] when dividing by zero, rather
/// than producing an infinite value.
///
/// # Example
/// ```
/// use postfixer::{interpreter::evaluator::binary::apply_operator, token::Operator};
///
/// assert_eq!(apply_operator(Operator::Sub, 8.0, 4.0).unwrap(), 4.0);
/// assert!(apply_operator(Operator::Div, 1.0, 0.0).is_err());
/// ```
pub fn apply_operator(op: Operator, a: f64, b: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(a / b)
        },
    }
}
