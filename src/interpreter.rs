/// The converter module rewrites infix tokens into postfix order.
///
/// Implements the shunting-yard algorithm together with the eager bracket
/// balance check that runs before it.
///
/// # Responsibilities
/// - Resolves operator precedence and left associativity.
/// - Places each function directly after its parenthesized argument.
/// - Reports mismatched brackets.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// Walks the sequence with a single operand stack, looking variables up in
/// the bindings gathered beforehand.
///
/// # Responsibilities
/// - Applies the four arithmetic operators and the built-in functions.
/// - Reports domain errors such as division by zero or a negative square
///   root.
/// - Reports malformed sequences that leave too few or too many operands.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression text and produces a sequence of
/// classified tokens: numbers, operators, parentheses, functions and
/// variables. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Removes whitespace and scans with a longest-match rule.
/// - Tells function names apart from variable names.
/// - Skips characters that belong to no token.
pub mod lexer;
/// Sources of variable values.
///
/// Defines the [`VariableProvider`](provider::VariableProvider) trait the
/// orchestrator calls for each free variable, along with lookup-table,
/// closure, interactive and layered implementations.
pub mod provider;
