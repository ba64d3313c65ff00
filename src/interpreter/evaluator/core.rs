use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{binary::apply_operator, function::apply_function},
    token::{Token, TokenKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Values for the variables of one evaluation, keyed by name.
pub type Bindings = HashMap<String, f64>;

/// Evaluates a postfix token sequence with a single operand stack.
///
/// Numbers and variables push a value. An operator pops the right-hand
/// operand, then the left-hand one, and pushes the result. A function pops
/// its argument and pushes the result. Parentheses never appear in postfix
/// form and are ignored if present.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::converter::to_postfix).
/// - `bindings`: A value for every variable the sequence references.
///
/// # Errors
/// - [`RuntimeError::UnboundVariable`] if a variable has no binding.
/// - [`RuntimeError::InsufficientOperands`] /
///   [`RuntimeError::InsufficientArguments`] if the stack runs short.
/// - [`RuntimeError::DivisionByZero`] and [`RuntimeError::NegativeSqrt`] for
///   domain errors.
/// - [`RuntimeError::OperandCountMismatch`] if anything other than a single
///   value is left at the end.
///
/// # Example
/// ```
/// use postfixer::{
///     interpreter::{
///         converter::to_postfix,
///         evaluator::core::{Bindings, evaluate},
///         lexer::tokenize,
///     },
/// };
///
/// let postfix = to_postfix(&tokenize("x * (2 + 3)")).unwrap();
/// let bindings = Bindings::from([("x".to_string(), 4.0)]);
/// assert_eq!(evaluate(&postfix, &bindings).unwrap(), 20.0);
/// ```
pub fn evaluate(postfix: &[Token], bindings: &Bindings) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.kind() {
            TokenKind::Number => stack.push(parse_number(token.text())?),
            TokenKind::Variable => {
                let value = bindings.get(token.text())
                                    .copied()
                                    .ok_or_else(|| RuntimeError::UnboundVariable {
                                        name: token.text().to_string(),
                                    })?;
                stack.push(value);
            },
            TokenKind::Operator(operator) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::InsufficientOperands { operator });
                };
                stack.push(apply_operator(operator, a, b)?);
            },
            TokenKind::Function(function) => {
                let arg = stack.pop()
                               .ok_or(RuntimeError::InsufficientArguments { function })?;
                stack.push(apply_function(function, arg)?);
            },
            TokenKind::LeftParen | TokenKind::RightParen => {},
        }
    }

    match stack.as_slice() {
        [value] => {
            debug!(result = value, "evaluated postfix");
            Ok(*value)
        },
        values => Err(RuntimeError::OperandCountMismatch { count: values.len() }),
    }
}

fn parse_number(literal: &str) -> EvalResult<f64> {
    literal.parse()
           .map_err(|_| RuntimeError::InvalidNumber { literal: literal.to_string() })
}
