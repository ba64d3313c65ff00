use thiserror::Error;

/// Represents all the ways a variable provider can refuse a request.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider has no value for the variable.
    #[error("Error: no value for variable '{name}'")]
    Unbound {
        /// The name of the variable.
        name: String,
    },
    /// Input ran out before a value for the variable was read.
    #[error("Error: input ended before a value for '{name}' was given")]
    EndOfInput {
        /// The name of the variable.
        name: String,
    },
    /// The text given for the variable is not a number.
    #[error("Error: invalid value '{input}' for variable '{name}'")]
    InvalidValue {
        /// The name of the variable.
        name:  String,
        /// The rejected text.
        input: String,
    },
    /// A preset binding was not of the form `name=value`.
    #[error("Error: invalid binding '{binding}', expected NAME=VALUE")]
    InvalidBinding {
        /// The rejected binding.
        binding: String,
    },
    /// Reading the value or writing the prompt failed.
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}
