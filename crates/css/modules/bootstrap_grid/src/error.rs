//! Error type shared by the grid class generator and its configuration.

use thiserror::Error;

/// Errors raised while computing grid classes.
///
/// Every check runs before any token is produced, so a caller never sees a
/// partially built class string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A parameter is outside the range the grid arithmetic accepts.
    #[error("invalid argument `{parameter}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter (`total_columns`, `xs`, `index`, ...)
        parameter: &'static str,
        /// Human readable reason
        message: String,
    },
}

impl GridError {
    /// Build an [`GridError::InvalidArgument`] for `parameter`.
    pub fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => *parameter,
        }
    }
}

/// Result alias used throughout the crate.
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// The display form names the parameter.
    ///
    /// # Panics
    /// Panics if the message does not mention the parameter.
    #[test]
    fn test_invalid_argument_display() {
        let err = GridError::invalid("xs", "span must be positive");
        assert_eq!(err.parameter(), "xs");
        assert_eq!(
            err.to_string(),
            "invalid argument `xs`: span must be positive"
        );
    }
}
