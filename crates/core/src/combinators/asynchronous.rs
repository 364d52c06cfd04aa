//! Asynchronous reactions to an outcome's state, and the adapter that turns
//! an awaited error into a failure outcome
//!
//! Every combinator first awaits the incoming future. When its predicate
//! holds it awaits the supplied action before returning; otherwise it returns
//! the outcome without further suspension. Nothing runs concurrently.

use crate::results::{Outcome, ServiceResult};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Combinators for futures that resolve to an [`Outcome`].
///
/// A panic inside an action is not caught here; it unwinds through the
/// chain. Only [`wait_for_result`] converts errors into failures.
pub trait OutcomeFutureExt<R>: Future<Output = R> + Sized
where
    R: Outcome,
{
    /// Await the outcome and, when successful, replace it with the outcome
    /// produced by `action`
    fn on_success_async<F, Fut>(self, action: F) -> impl Future<Output = R>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = R>,
    {
        async move {
            let result = self.await;
            if result.is_successful() {
                action(result).await
            } else {
                result
            }
        }
    }

    /// Await the outcome and, when failed, await `action`
    fn on_failure_async<F, Fut>(self, action: F) -> impl Future<Output = R>
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let result = self.await;
            if result.is_failure() {
                action(&result).await;
            }
            result
        }
    }

    /// Await the outcome and, when cancelled, await `action`
    fn on_cancelled_async<F, Fut>(self, action: F) -> impl Future<Output = R>
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let result = self.await;
            if result.is_cancelled() {
                action(&result).await;
            }
            result
        }
    }

    /// Await the outcome, then await `action` whatever the state
    fn always_async<F, Fut>(self, action: F) -> impl Future<Output = R>
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let result = self.await;
            action(&result).await;
            result
        }
    }
}

impl<R, Fut> OutcomeFutureExt<R> for Fut
where
    R: Outcome,
    Fut: Future<Output = R>,
{
}

/// Await a fallible future and capture its result as a [`ServiceResult`].
///
/// `Ok` becomes a success carrying the value. `Err`, or a panic while the
/// future is polled, becomes a failure carrying the error.
pub async fn wait_for_result<T, E, F>(future: F) -> ServiceResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(value)) => ServiceResult::success(value),
        Ok(Err(error)) => {
            let error = error.into();
            tracing::debug!(error = %format!("{error:#}"), "awaited task failed");
            ServiceResult::failure(error)
        }
        Err(payload) => panicked(payload.as_ref()),
    }
}

/// Await an infallible future and capture its value as a [`ServiceResult`].
///
/// Only a panic while the future is polled produces a failure.
pub async fn wait_for_completion<T, F>(future: F) -> ServiceResult<T>
where
    F: Future<Output = T>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => ServiceResult::success(value),
        Err(payload) => panicked(payload.as_ref()),
    }
}

fn panicked<T>(payload: &(dyn Any + Send)) -> ServiceResult<T> {
    let message = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked".to_string()
    };
    tracing::debug!(%message, "awaited task panicked");
    ServiceResult::failure_message(message)
}

/// Method-call form of [`wait_for_result`] and [`wait_for_completion`]
pub trait TaskExt: Future + Sized {
    /// See [`wait_for_result`]
    fn wait_for_result<T, E>(self) -> impl Future<Output = ServiceResult<T>>
    where
        Self: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        wait_for_result(self)
    }

    /// See [`wait_for_completion`]
    fn wait_for_completion(self) -> impl Future<Output = ServiceResult<Self::Output>> {
        wait_for_completion(self)
    }
}

impl<F: Future> TaskExt for F {}
