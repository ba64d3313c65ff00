use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    token::Function,
};

/// Applies a built-in function to its single argument.
///
/// `sin` and `cos` take radians and always succeed.
///
/// # Errors
/// Returns [`RuntimeError::NegativeSqrt`] when `sqrt` gets a negative
/// argument.
pub fn apply_function(function: Function, arg: f64) -> EvalResult<f64> {
    match function {
        Function::Sin => Ok(arg.sin()),
        Function::Cos => Ok(arg.cos()),
        Function::Sqrt if arg < 0.0 => Err(RuntimeError::NegativeSqrt { value: arg }),
        Function::Sqrt => Ok(arg.sqrt()),
    }
}
