//! Extension traits bridging `std::result::Result` into outcome values

use crate::results::{OperationResult, ServiceResult};

/// Extension trait for turning a `Result` into an outcome value.
///
/// `Ok` becomes a success carrying the value, `Err` becomes a failure
/// carrying the error.
pub trait ResultExt<T> {
    /// Convert into an [`OperationResult`]
    fn into_operation_result(self) -> OperationResult<T>;

    /// Convert into a [`ServiceResult`] with the given failure status code
    fn into_service_result(self, failure_status: u16) -> ServiceResult<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn into_operation_result(self) -> OperationResult<T> {
        match self {
            Ok(value) => OperationResult::success(value),
            Err(error) => OperationResult::failure(error),
        }
    }

    fn into_service_result(self, failure_status: u16) -> ServiceResult<T> {
        match self {
            Ok(value) => ServiceResult::success(value),
            Err(error) => ServiceResult::failure_with_status(error, failure_status),
        }
    }
}
