/// Binary operator evaluation.
///
/// Implements the four arithmetic operators, including the division by zero
/// check.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the postfix stack machine, the bindings type and the result
/// alias shared by the evaluator.
pub mod core;

/// Function evaluation.
///
/// Applies the built-in unary functions to their argument.
pub mod function;
