use thiserror::Error;

use crate::token::{Function, Operator};

/// Represents all errors that can occur while evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// The postfix sequence references a variable with no binding.
    #[error("Error: no value bound for variable '{name}'")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// A binary operator found fewer than two values on the stack.
    #[error("Error: not enough operands for the operator '{operator}'")]
    InsufficientOperands {
        /// The operator being applied.
        operator: Operator,
    },
    /// A function found no value on the stack.
    #[error("Error: not enough arguments for the function '{function}'")]
    InsufficientArguments {
        /// The function being applied.
        function: Function,
    },
    /// The right-hand operand of `/` was zero.
    #[error("Error: division by zero")]
    DivisionByZero,
    /// `sqrt` was applied to a negative value.
    #[error("Error: negative value under sqrt ({value})")]
    NegativeSqrt {
        /// The offending argument.
        value: f64,
    },
    /// Evaluation finished with a number of values other than one.
    #[error("Error: operands count mismatch ({count} values left on the stack)")]
    OperandCountMismatch {
        /// How many values were left.
        count: usize,
    },
    /// A number token whose text is not a decimal literal.
    #[error("Error: invalid number literal '{literal}'")]
    InvalidNumber {
        /// The text of the token.
        literal: String,
    },
}
