//! Combinators chaining behaviour off outcomes
//!
//! - [`OutcomeExt`]: `on_success`, `on_failure`, `on_cancelled`, `always`.
//! - [`OutcomeFutureExt`]: the same four reactions for futures of outcomes.
//! - [`wait_for_result`] / [`wait_for_completion`]: the boundary that turns
//!   an awaited error or panic into a failure outcome.

pub mod asynchronous;
pub mod sync;

pub use asynchronous::{wait_for_completion, wait_for_result, OutcomeFutureExt, TaskExt};
pub use sync::OutcomeExt;
