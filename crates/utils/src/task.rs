//! Fire-and-forget execution of fallible futures

use outcome_core::{wait_for_result, Error, Outcome, Result};
use std::future::Future;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Spawn `future` onto the current tokio runtime and discard its result.
///
/// A failure, including a panic inside the future, is logged at `error`
/// level. Fails with [`Error::Configuration`] when called outside a runtime.
pub fn forget<F, E>(future: F) -> Result<JoinHandle<()>>
where
    F: Future<Output = std::result::Result<(), E>> + Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
{
    forget_ignoring(future, |_| false)
}

/// Like [`forget`], but failures for which `is_acceptable` returns `true` are
/// logged at `debug` level instead of `error`.
///
/// An [`Error`] that signals a programming mistake is always logged at
/// `error`, whatever `is_acceptable` says.
pub fn forget_ignoring<F, E, P>(future: F, is_acceptable: P) -> Result<JoinHandle<()>>
where
    F: Future<Output = std::result::Result<(), E>> + Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
    P: FnOnce(&anyhow::Error) -> bool + Send + 'static,
{
    let handle = Handle::try_current()
        .map_err(|e| Error::configuration(format!("no tokio runtime to spawn onto: {e}")))?;

    Ok(handle.spawn(async move {
        let outcome = wait_for_result(future).await;
        let Some(error) = outcome.exception() else {
            return;
        };

        let programming_error = error
            .downcast_ref::<Error>()
            .is_some_and(Error::is_programming_error);

        if !programming_error && is_acceptable(error) {
            tracing::debug!(error = %format!("{error:#}"), "forgotten task failed with acceptable error");
        } else {
            tracing::error!(error = %format!("{error:#}"), "forgotten task failed");
        }
    }))
}
