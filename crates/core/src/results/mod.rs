//! Operation outcomes: success, cancellation and failure as values
//!
//! ## Key Components
//!
//! - **`outcome`**: the [`Status`] enum and the [`Outcome`] /
//!   [`ServiceOutcome`] contracts every result type implements.
//! - **`operation`**: [`OperationResult`], the general outcome with an
//!   optional payload.
//! - **`service`**: [`ServiceResult`], an operation result plus a status code.
//! - **`combine`**: the reduction behind `combine` on both result types.

mod combine;
pub mod operation;
pub mod outcome;
pub mod service;

pub use operation::OperationResult;
pub use outcome::{Outcome, ServiceOutcome, Status};
pub use service::ServiceResult;
