use thiserror::Error;

/// Why an expression could not produce a value.
///
/// Division by zero is not a failure; it yields an infinite or NaN result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalFailure {
    /// The value stack underflowed or did not end with exactly one value.
    /// Strict conversion also reports unmatched parentheses this way.
    #[error("malformed expression")]
    Malformed,
    /// Only raised by strict conversion.
    #[error("unrecognized input '{ch}' at position {position}")]
    UnrecognizedInput { ch: char, position: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
