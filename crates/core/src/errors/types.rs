//! Core error type definitions

/// Result type alias for outcome operations
pub type Result<T> = std::result::Result<T, Error>;

/// Programming errors raised by the outcome and optional types.
///
/// Ordinary operation failures are never reported through this type; they
/// travel as data inside an [`OperationResult`](crate::OperationResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value that must be present was absent at construction time
    #[error("invariant violation: {message}")]
    InvariantViolation { message: String },

    /// An operation was attempted in a state that does not support it
    #[error("invalid state: {message}")]
    InvalidState { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}
