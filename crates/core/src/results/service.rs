//! Outcome of a service call: an operation result plus a status code

use super::combine::{reduce, Aggregate};
use super::operation::OperationResult;
use super::outcome::{Outcome, ServiceOutcome, Status};
use crate::constants::{DEFAULT_FAILURE_STATUS_CODE, DEFAULT_SUCCESS_STATUS_CODE};
use crate::unit::Unit;

/// An [`OperationResult`] extended with an HTTP-style status code.
///
/// Successes carry 200, failures carry the caller's code (500 unless
/// specified) and cancellations carry none.
#[derive(Debug, Clone)]
pub struct ServiceResult<T = Unit> {
    operation: OperationResult<T>,
    status_code: Option<u16>,
}

impl<T> ServiceResult<T> {
    fn from_parts(operation: OperationResult<T>, status_code: Option<u16>) -> Self {
        Self {
            operation,
            status_code,
        }
    }

    /// A successful outcome carrying `result`, status 200
    pub fn success(result: T) -> Self {
        Self::from_parts(
            OperationResult::success(result),
            Some(DEFAULT_SUCCESS_STATUS_CODE),
        )
    }

    /// A cancelled outcome without status code
    pub fn cancelled() -> Self {
        Self::from_parts(OperationResult::cancelled(), None)
    }

    /// A failed outcome caused by `error`, status 500
    pub fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::failure_with_status(error, DEFAULT_FAILURE_STATUS_CODE)
    }

    /// A failed outcome caused by `error` with an explicit status code
    pub fn failure_with_status(error: impl Into<anyhow::Error>, status_code: u16) -> Self {
        Self::from_parts(OperationResult::failure(error), Some(status_code))
    }

    /// A failed outcome with a best-effort `result` and explicit status code
    pub fn failure_with_result(
        error: impl Into<anyhow::Error>,
        result: T,
        status_code: u16,
    ) -> Self {
        Self::from_parts(
            OperationResult::failure_with_result(error, result),
            Some(status_code),
        )
    }

    /// A failed outcome described only by `message`, status 500
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::failure_message_with_status(message, DEFAULT_FAILURE_STATUS_CODE)
    }

    /// A failed outcome described only by `message` with an explicit status code
    pub fn failure_message_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::from_parts(OperationResult::failure_message(message), Some(status_code))
    }

    /// A message-only failure with a best-effort `result` and explicit status code
    pub fn failure_message_with_result(
        message: impl Into<String>,
        result: T,
        status_code: u16,
    ) -> Self {
        Self::from_parts(
            OperationResult::failure_message_with_result(message, result),
            Some(status_code),
        )
    }

    /// Attach warnings at construction time
    #[must_use]
    pub fn with_warnings<I, S>(self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(self.operation.with_warnings(warnings), self.status_code)
    }

    /// The payload
    pub fn result(&self) -> Option<&T> {
        self.operation.result()
    }

    /// Take the payload
    pub fn into_result(self) -> Option<T> {
        self.operation.into_result()
    }

    /// The underlying operation result
    pub fn operation(&self) -> &OperationResult<T> {
        &self.operation
    }

    /// Drop the status code
    pub fn into_operation(self) -> OperationResult<T> {
        self.operation
    }
}

impl ServiceResult {
    /// A successful outcome with an informational message, status 200
    pub fn success_message(message: impl Into<String>) -> Self {
        Self::from_parts(
            OperationResult::success_message(message),
            Some(DEFAULT_SUCCESS_STATUS_CODE),
        )
    }

    /// Reduce `results` into a single payload-free service outcome, following
    /// the same rules as [`OperationResult::combine`]. A combined failure
    /// carries status 500.
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

impl<T> From<ServiceResult<T>> for OperationResult<T> {
    fn from(result: ServiceResult<T>) -> Self {
        result.into_operation()
    }
}

impl<T> Outcome for ServiceResult<T> {
    fn status(&self) -> Status {
        self.operation.status()
    }

    fn message(&self) -> Option<&str> {
        self.operation.message()
    }

    fn exception(&self) -> Option<&anyhow::Error> {
        self.operation.exception()
    }

    fn warnings(&self) -> &[String] {
        self.operation.warnings()
    }

    fn warnings_mut(&mut self) -> &mut Vec<String> {
        self.operation.warnings_mut()
    }

    fn is_handled(&self) -> bool {
        self.operation.is_handled()
    }

    fn set_handled(&mut self, handled: bool) {
        self.operation.set_handled(handled);
    }
}

impl<T> ServiceOutcome for ServiceResult<T> {
    fn status_code(&self) -> Option<u16> {
        self.status_code
    }
}
