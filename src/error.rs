//! Error types shared by the instance model and both optimizers.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowShopError>;

/// Errors reported before any search begins.
///
/// Search itself is total over valid inputs: once an instance and a
/// configuration have been accepted, neither optimizer can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowShopError {
    /// The instance violates `n >= 2`, `m >= 1`, or its processing-time
    /// grid does not match the declared dimensions.
    InvalidInstance(String),

    /// An optimizer parameter is out of range.
    InvalidConfiguration(String),

    /// The instance text could not be parsed.
    Parse {
        /// 1-based line number where parsing failed.
        line: usize,
        /// Human-readable description.
        message: String,
    },
}

impl FlowShopError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        FlowShopError::InvalidConfiguration(message.into())
    }

    pub(crate) fn instance(message: impl Into<String>) -> Self {
        FlowShopError::InvalidInstance(message.into())
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        FlowShopError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for FlowShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowShopError::InvalidInstance(msg) => write!(f, "invalid instance: {msg}"),
            FlowShopError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            FlowShopError::Parse { line, message } => {
                write!(f, "parse error at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for FlowShopError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FlowShopError::config("cooling_rate must be in (0, 1), got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid configuration: cooling_rate must be in (0, 1), got 1.5"
        );

        let err = FlowShopError::parse(7, "expected 3 processing times, found 2");
        assert_eq!(
            err.to_string(),
            "parse error at line 7: expected 3 processing times, found 2"
        );
    }
}
