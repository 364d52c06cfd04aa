//! Shared utilities around `outcome-core`
//!
//! This crate wires outcome values into the ambient runtime: subscriber
//! installation and structured reporting through `tracing`, and
//! fire-and-forget spawning onto the current tokio runtime.

pub mod task;
pub mod tracing;

pub use crate::task::{forget, forget_ignoring};
pub use crate::tracing::{init, report, TracingConfig};
