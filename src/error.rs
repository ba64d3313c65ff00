/// Parsing errors.
///
/// Defines the errors raised while turning a token sequence into postfix
/// form. All of them concern bracket balance.
pub mod parse_error;
/// Variable provider errors.
///
/// Raised when a variable provider cannot supply a value for a name, or when
/// a preset binding given on the command line is malformed.
pub mod provider_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as division by zero or a malformed operand stack.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use provider_error::ProviderError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of the parse-and-evaluate pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A fieldless tag naming which failure occurred.
///
/// Useful for callers that branch on the failure without caring about its
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnbalancedBrackets,
    ExtraClosingBracket,
    ExtraOpeningBracket,
    UnboundVariable,
    InsufficientOperands,
    InsufficientArguments,
    DivisionByZero,
    NegativeSqrt,
    OperandCountMismatch,
    InvalidNumber,
    ProviderRejected,
}

impl Error {
    /// Returns the tag of this error.
    ///
    /// # Example
    /// ```
    /// use postfixer::{Bindings, error::ErrorKind, try_parse_and_evaluate};
    ///
    /// let err = try_parse_and_evaluate("1 / 0", &mut Bindings::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => match e {
                ParseError::UnbalancedBrackets => ErrorKind::UnbalancedBrackets,
                ParseError::ExtraClosingBracket => ErrorKind::ExtraClosingBracket,
                ParseError::ExtraOpeningBracket => ErrorKind::ExtraOpeningBracket,
            },
            Self::Runtime(e) => match e {
                RuntimeError::UnboundVariable { .. } => ErrorKind::UnboundVariable,
                RuntimeError::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
                RuntimeError::InsufficientArguments { .. } => ErrorKind::InsufficientArguments,
                RuntimeError::DivisionByZero => ErrorKind::DivisionByZero,
                RuntimeError::NegativeSqrt { .. } => ErrorKind::NegativeSqrt,
                RuntimeError::OperandCountMismatch { .. } => ErrorKind::OperandCountMismatch,
                RuntimeError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            },
            Self::Provider(_) => ErrorKind::ProviderRejected,
        }
    }
}
