//! Outcome of a general operation, optionally carrying a payload

use super::combine::{reduce, Aggregate};
use super::outcome::{Outcome, Status};
use crate::unit::Unit;
use std::sync::Arc;

/// The outcome of an operation: success, cancellation or failure, plus an
/// optional payload of type `T`.
///
/// Values are built only through the named factories and their state never
/// changes afterwards. `OperationResult` without a type argument is the
/// payload-free form.
#[derive(Debug, Clone)]
pub struct OperationResult<T = Unit> {
    status: Status,
    message: Option<String>,
    exception: Option<Arc<anyhow::Error>>,
    warnings: Vec<String>,
    handled: bool,
    result: Option<T>,
}

impl<T> OperationResult<T> {
    fn new(status: Status, message: Option<String>, exception: Option<anyhow::Error>) -> Self {
        Self {
            status,
            message,
            exception: exception.map(Arc::new),
            warnings: Vec::new(),
            handled: false,
            result: None,
        }
    }

    /// A successful outcome carrying `result`
    pub fn success(result: T) -> Self {
        let mut outcome = Self::new(Status::Success, None, None);
        outcome.result = Some(result);
        outcome
    }

    /// A cancelled outcome; carries neither message nor error
    pub fn cancelled() -> Self {
        Self::new(Status::Cancelled, None, None)
    }

    /// A failed outcome caused by `error`; the message is the error's message
    pub fn failure(error: impl Into<anyhow::Error>) -> Self {
        let error = error.into();
        Self::new(Status::Failure, Some(error.to_string()), Some(error))
    }

    /// A failed outcome that still exposes a best-effort `result`
    pub fn failure_with_result(error: impl Into<anyhow::Error>, result: T) -> Self {
        let mut outcome = Self::failure(error);
        outcome.result = Some(result);
        outcome
    }

    /// A failed outcome described only by `message`.
    ///
    /// An error object carrying the same message is synthesized, so the
    /// attached error's message always equals the outcome's message.
    pub fn failure_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = anyhow::Error::msg(message.clone());
        Self::new(Status::Failure, Some(message), Some(error))
    }

    /// [`failure_message`](Self::failure_message) with a best-effort `result`
    pub fn failure_message_with_result(message: impl Into<String>, result: T) -> Self {
        let mut outcome = Self::failure_message(message);
        outcome.result = Some(result);
        outcome
    }

    /// Attach warnings at construction time
    #[must_use]
    pub fn with_warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings = warnings.into_iter().map(Into::into).collect();
        self
    }

    /// The payload; set on success and on failures built with a fallback
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Take the payload
    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

impl OperationResult {
    /// A successful outcome with an informational message
    pub fn success_message(message: impl Into<String>) -> Self {
        Self::new(Status::Success, Some(message.into()), None)
    }

    /// Reduce `results` into a single payload-free outcome.
    ///
    /// - every result successful, or no results at all: success
    /// - at least one failure: failure whose message joins each failed
    ///   result's error description (or message) with newlines, in order
    /// - otherwise: cancellation
    ///
    /// Payloads of the inputs are not carried over.
    pub fn combine<'a, I, R>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a R>,
        R: Outcome + ?Sized + 'a,
    {
        match reduce(results) {
            Aggregate::Success => Self::success(Unit),
            Aggregate::Failure(message) => Self::failure_message(message),
            Aggregate::Cancelled => Self::cancelled(),
        }
    }
}

impl<T> Outcome for OperationResult<T> {
    fn status(&self) -> Status {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn exception(&self) -> Option<&anyhow::Error> {
        self.exception.as_deref()
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn warnings_mut(&mut self) -> &mut Vec<String> {
        &mut self.warnings
    }

    fn is_handled(&self) -> bool {
        self.handled
    }

    fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }
}
