use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    error::ProviderError,
    interpreter::evaluator::core::Bindings,
    token::is_variable_name,
};

/// Supplies values for the free variables of an expression.
///
/// The orchestrator asks for each distinct variable exactly once per
/// evaluation. A provider may block (for example while a user types) and may
/// refuse, in which case the whole evaluation fails with the returned error.
pub trait VariableProvider {
    /// Returns the value of the variable called `name`.
    ///
    /// # Errors
    /// Any [`ProviderError`] the provider chooses to report.
    fn value_of(&mut self, name: &str) -> Result<f64, ProviderError>;
}

impl VariableProvider for Bindings {
    fn value_of(&mut self, name: &str) -> Result<f64, ProviderError> {
        self.get(name)
            .copied()
            .ok_or_else(|| ProviderError::Unbound { name: name.to_string() })
    }
}

impl<P> VariableProvider for &mut P where P: VariableProvider + ?Sized
{
    fn value_of(&mut self, name: &str) -> Result<f64, ProviderError> {
        (**self).value_of(name)
    }
}

/// A provider backed by a closure. Built with [`from_fn`].
pub struct FnProvider<F>(F);

/// Wraps a closure as a [`VariableProvider`].
///
/// # Example
/// ```
/// use postfixer::{interpreter::provider::from_fn, try_parse_and_evaluate};
///
/// let mut provider = from_fn(|name: &str| Ok(name.len() as f64));
/// assert_eq!(try_parse_and_evaluate("abc + ab", &mut provider).unwrap(), 5.0);
/// ```
pub const fn from_fn<F>(f: F) -> FnProvider<F>
    where F: FnMut(&str) -> Result<f64, ProviderError>
{
    FnProvider(f)
}

impl<F> VariableProvider for FnProvider<F> where F: FnMut(&str) -> Result<f64, ProviderError>
{
    fn value_of(&mut self, name: &str) -> Result<f64, ProviderError> {
        (self.0)(name)
    }
}

/// Asks for each value interactively.
///
/// Writes `Enter the value of 'name': ` to the output, then reads one line
/// from the input and parses it as a number.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use postfixer::{interpreter::provider::PromptProvider, try_parse_and_evaluate};
///
/// let mut out = Vec::new();
/// let mut provider = PromptProvider::new(Cursor::new("3\n"), &mut out);
/// assert_eq!(try_parse_and_evaluate("x + 5", &mut provider).unwrap(), 8.0);
/// drop(provider);
/// assert_eq!(String::from_utf8(out).unwrap(), "Enter the value of 'x': ");
/// ```
pub struct PromptProvider<R, W> {
    input:  R,
    output: W,
}

impl<R, W> PromptProvider<R, W>
    where R: BufRead,
          W: Write
{
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> VariableProvider for PromptProvider<R, W>
    where R: BufRead,
          W: Write
{
    fn value_of(&mut self, name: &str) -> Result<f64, ProviderError> {
        write!(self.output, "Enter the value of '{name}': ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ProviderError::EndOfInput { name: name.to_string() });
        }

        let input = line.trim();
        input.parse().map_err(|_| ProviderError::InvalidValue { name:  name.to_string(),
                                                                input: input.to_string(), })
    }
}

/// Looks names up in a set of presets first, then asks a fallback provider.
pub struct Layered<'a, P> {
    presets:  &'a Bindings,
    fallback: P,
}

impl<'a, P> Layered<'a, P> where P: VariableProvider
{
    pub const fn new(presets: &'a Bindings, fallback: P) -> Self {
        Self { presets, fallback }
    }
}

impl<P> VariableProvider for Layered<'_, P> where P: VariableProvider
{
    fn value_of(&mut self, name: &str) -> Result<f64, ProviderError> {
        if let Some(value) = self.presets.get(name) {
            debug!(name, value, "using preset value");
            return Ok(*value);
        }
        self.fallback.value_of(name)
    }
}

/// Parses a preset binding of the form `NAME=VALUE`.
///
/// Whitespace around the name and the value is ignored. The name must be a
/// valid variable name, so function names such as `sin` are rejected.
///
/// # Errors
/// Returns [`ProviderError::InvalidBinding`] if the text has no `=`, the name
/// is not a variable name, or the value is not a number.
///
/// # Example
/// ```
/// use postfixer::interpreter::provider::parse_binding;
///
/// assert_eq!(parse_binding("x1 = 2.5").unwrap(), ("x1".to_string(), 2.5));
/// assert!(parse_binding("sqrt=4").is_err());
/// assert!(parse_binding("y").is_err());
/// ```
pub fn parse_binding(binding: &str) -> Result<(String, f64), ProviderError> {
    let invalid = || ProviderError::InvalidBinding { binding: binding.to_string() };

    let (name, value) = binding.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if !is_variable_name(name) {
        return Err(invalid());
    }
    let value = value.trim().parse().map_err(|_| invalid())?;
    Ok((name.to_string(), value))
}
