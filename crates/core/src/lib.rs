//! Outcome and optional-value primitives for the `outcome` workspace.
//!
//! This crate models the result of an operation as a value instead of an
//! exception, and presence or absence of a value as an explicit sum type.
//!
//! ## Key Components
//!
//! - **`unit`**: The [`Unit`] type, a value standing in for "no meaningful
//!   result" so procedures and functions compose uniformly.
//! - **`optional`**: [`Optional`], its standalone present/absent shapes and
//!   the synchronous and asynchronous combinators over it.
//! - **`results`**: [`OperationResult`] and [`ServiceResult`], the shared
//!   [`Outcome`] contract and aggregation through `combine`.
//! - **`combinators`**: `on_success` / `on_failure` / `on_cancelled` /
//!   `always` chains, their async forms, and [`wait_for_result`].
//! - **`errors`**: The crate's own [`Error`] enum and [`Result`] alias for
//!   programming errors such as reading an empty optional.
//! - **`constants`**: Default status codes and configuration names.

pub mod combinators;
pub mod constants;
pub mod errors;
pub mod functional;
pub mod optional;
pub mod results;
pub mod unit;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    combinators::{
        wait_for_completion, wait_for_result, OutcomeExt, OutcomeFutureExt, TaskExt,
    },
    constants::*,
    errors::{Error, Result, ResultExt},
    optional::{none, some, NoneValue, Optional, OptionalFutureExt, OptionalState, SomeValue, ToSome},
    results::{OperationResult, Outcome, ServiceOutcome, ServiceResult, Status},
    unit::Unit,
};
