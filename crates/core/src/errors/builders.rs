//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an invariant violation error
    #[must_use]
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Error::InvariantViolation {
            message: message.into(),
        }
    }

    /// Create an invalid state error
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error signals a programming mistake rather than bad input
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Error::InvariantViolation { .. } | Error::InvalidState { .. }
        )
    }
}
