//! # postfixer
//!
//! postfixer evaluates infix arithmetic expressions.
//! It tokenizes the text, rewrites it into postfix order with the
//! shunting-yard algorithm and evaluates the result on an operand stack.
//! Expressions may use numbers, variables, `+ - * /`, parentheses and the
//! functions `sin`, `cos` and `sqrt`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    error::{Error, ParseError, ProviderError},
    interpreter::{
        converter::{check_bracket_balance, to_postfix},
        evaluator::core::evaluate,
        lexer::tokenize,
        provider::VariableProvider,
    },
    token::{Token, TokenKind},
};

pub use crate::interpreter::evaluator::core::Bindings;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while converting,
/// binding or evaluating an expression. Each phase has its own enum, and
/// [`Error`](error::Error) gathers them for the orchestrator.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (converter, evaluator,
///   providers).
/// - Gives each failure a human readable message.
pub mod error;
/// Runs the pipeline stages.
///
/// This module holds the lexer, the shunting-yard converter, the postfix
/// evaluator and the variable providers.
pub mod interpreter;
/// Installs the `tracing` subscriber used by the command line tool.
pub mod logging;
/// Drives repeated evaluations for the interactive and batch front ends.
pub mod session;
/// Defines tokens and the closed operator and function sets.
pub mod token;

/// An expression that has been tokenized and converted to postfix form.
///
/// Parsing checks bracket balance eagerly, so a parsed expression is known to
/// be well bracketed. Evaluating it may still fail, for example on a division
/// by zero or when operators and operands do not line up.
///
/// # Example
/// ```
/// use postfixer::{Bindings, Expression, token::render};
///
/// let expression = Expression::parse("(a + b) * a").unwrap();
/// assert_eq!(render(expression.postfix()), "a b + a *");
/// assert_eq!(expression.variables(), ["a", "b"]);
///
/// let mut values = Bindings::from([("a".to_string(), 2.0), ("b".to_string(), 3.0)]);
/// assert_eq!(expression.evaluate(&mut values).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    tokens:    Vec<Token>,
    postfix:   Vec<Token>,
    variables: Vec<String>,
}

impl Expression {
    /// Tokenizes `source`, checks its brackets and converts it to postfix
    /// order.
    ///
    /// # Errors
    /// Returns [`ParseError::UnbalancedBrackets`] if the brackets do not
    /// match up.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(source);
        check_bracket_balance(&tokens)?;

        let mut variables = Vec::new();
        let mut seen = HashSet::new();
        for token in &tokens {
            if token.kind() == TokenKind::Variable && seen.insert(token.text()) {
                variables.push(token.text().to_string());
            }
        }

        let postfix = to_postfix(&tokens)?;

        Ok(Self { tokens,
                  postfix,
                  variables })
    }

    /// The infix tokens, in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The tokens in postfix order.
    #[must_use]
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// The distinct variable names, in order of first appearance.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Asks `provider` once for each distinct variable.
    ///
    /// # Errors
    /// Returns the first error the provider reports.
    pub fn bind<P>(&self, provider: &mut P) -> Result<Bindings, ProviderError>
        where P: VariableProvider + ?Sized
    {
        let mut bindings = Bindings::with_capacity(self.variables.len());
        for name in &self.variables {
            let value = provider.value_of(name)?;
            bindings.insert(name.clone(), value);
        }
        debug!(?bindings, "bound variables");
        Ok(bindings)
    }

    /// Evaluates the expression against values that are already known.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`](error::RuntimeError) wrapped in [`Error`].
    pub fn evaluate_with(&self, bindings: &Bindings) -> Result<f64, Error> {
        Ok(evaluate(&self.postfix, bindings)?)
    }

    /// Binds the variables through `provider` and evaluates the expression.
    ///
    /// # Errors
    /// Returns an error if the provider refuses a variable or evaluation
    /// fails.
    pub fn evaluate<P>(&self, provider: &mut P) -> Result<f64, Error>
        where P: VariableProvider + ?Sized
    {
        let bindings = self.bind(provider)?;
        self.evaluate_with(&bindings)
    }
}

/// Parses and evaluates `expression`, returning the typed error on failure.
///
/// The steps are: tokenize, check bracket balance, collect the distinct
/// variables, ask `provider` for each of them once, convert to postfix and
/// evaluate.
///
/// # Errors
/// Returns an error if any step fails.
///
/// # Examples
/// ```
/// use postfixer::{Bindings, try_parse_and_evaluate};
///
/// let mut none = Bindings::new();
/// assert_eq!(try_parse_and_evaluate("2 + 3 * 4", &mut none).unwrap(), 14.0);
/// assert!(try_parse_and_evaluate("1 + 2 -", &mut none).is_err());
/// ```
pub fn try_parse_and_evaluate<P>(expression: &str, provider: &mut P) -> Result<f64, Error>
    where P: VariableProvider + ?Sized
{
    Expression::parse(expression)?.evaluate(provider)
}

/// Parses and evaluates `expression`, collapsing every failure into `None`.
///
/// Failures are reported through `tracing` at the `warn` level before
/// `None` is returned. Use [`try_parse_and_evaluate`] to inspect the error
/// instead.
///
/// # Example
/// ```
/// use postfixer::{Bindings, parse_and_evaluate};
///
/// let mut none = Bindings::new();
/// assert_eq!(parse_and_evaluate("(2 + 3) * 4", &mut none), Some(20.0));
/// assert_eq!(parse_and_evaluate("1 / 0", &mut none), None);
/// ```
pub fn parse_and_evaluate<P>(expression: &str, provider: &mut P) -> Option<f64>
    where P: VariableProvider + ?Sized
{
    match try_parse_and_evaluate(expression, provider) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(expression, kind = ?error.kind(), "{error}");
            None
        },
    }
}
