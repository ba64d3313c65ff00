use tracing::debug;

use crate::{
    error::ParseError,
    token::{Token, TokenKind, render},
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Checks that every `(` has a matching `)` and none closes early.
///
/// Walks the tokens keeping a running depth: `(` adds one, `)` subtracts one.
/// The check fails as soon as the depth goes negative, or at the end if it is
/// not zero.
///
/// # Errors
/// Returns [`ParseError::UnbalancedBrackets`] on any mismatch.
///
/// # Example
/// ```
/// use postfixer::interpreter::{converter::check_bracket_balance, lexer::tokenize};
///
/// assert!(check_bracket_balance(&tokenize("(1 + 2) * (3)")).is_ok());
/// assert!(check_bracket_balance(&tokenize("2 + )3(")).is_err());
/// ```
pub fn check_bracket_balance(tokens: &[Token]) -> ParseResult<()> {
    let mut depth: usize = 0;
    for token in tokens {
        match token.kind() {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnbalancedBrackets)?;
            },
            _ => {},
        }
    }
    if depth == 0 { Ok(()) } else { Err(ParseError::UnbalancedBrackets) }
}

/// Rewrites infix tokens into postfix (reverse Polish) order using the
/// shunting-yard algorithm.
///
/// - Numbers and variables go straight to the output.
/// - Functions and `(` are pushed onto the operator stack.
/// - `)` pops operators to the output until the matching `(`, which is
///   discarded. A function directly below that `(` is emitted next, so a
///   function always follows its argument.
/// - An operator first pops every stacked operator of greater or equal
///   precedence, which makes all four operators left-associative.
/// - At the end the stack is drained to the output.
///
/// # Errors
/// - [`ParseError::ExtraClosingBracket`] if a `)` has no `(` to match.
/// - [`ParseError::ExtraOpeningBracket`] if a `(` is left on the stack.
///
/// # Example
/// ```
/// use postfixer::{
///     interpreter::{converter::to_postfix, lexer::tokenize},
///     token::render,
/// };
///
/// let postfix = to_postfix(&tokenize("8 - 4 - 2")).unwrap();
/// assert_eq!(render(&postfix), "8 4 - 2 -");
///
/// let postfix = to_postfix(&tokenize("sin(1 + 2 * 3)")).unwrap();
/// assert_eq!(render(&postfix), "1 2 3 * + sin");
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind() {
            TokenKind::Number | TokenKind::Variable => output.push(token.clone()),
            TokenKind::Function(_) | TokenKind::LeftParen => stack.push(token),
            TokenKind::RightParen => {
                loop {
                    match stack.pop() {
                        Some(top) if top.kind() == TokenKind::LeftParen => break,
                        Some(top) => output.push(top.clone()),
                        None => return Err(ParseError::ExtraClosingBracket),
                    }
                }
                if let Some(top) = stack.last()
                   && matches!(top.kind(), TokenKind::Function(_))
                {
                    output.push((*top).clone());
                    stack.pop();
                }
            },
            TokenKind::Operator(op) => {
                while let Some(top) = stack.last()
                      && let TokenKind::Operator(top_op) = top.kind()
                      && top_op.precedence() >= op.precedence()
                {
                    output.push((*top).clone());
                    stack.pop();
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind() == TokenKind::LeftParen {
            return Err(ParseError::ExtraOpeningBracket);
        }
        output.push(top.clone());
    }

    debug!(postfix = %render(&output), "converted to postfix");
    Ok(output)
}
