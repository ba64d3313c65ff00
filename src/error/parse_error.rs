use thiserror::Error;

/// Represents all errors that can occur while converting infix tokens to
/// postfix order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The bracket nesting depth went negative or did not return to zero.
    #[error("Error: unbalanced brackets")]
    UnbalancedBrackets,
    /// A `)` had no matching `(` on the operator stack.
    #[error("Error: extra closing bracket")]
    ExtraClosingBracket,
    /// A `(` was still on the operator stack once the input ran out.
    #[error("Error: extra opening bracket")]
    ExtraOpeningBracket,
}
