//! Reduction of many outcomes into one

use super::outcome::Outcome;
use crate::constants::COMBINED_MESSAGE_SEPARATOR;

/// Summary produced by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Aggregate {
    Success,
    Failure(String),
    Cancelled,
}

/// Reduce `results` to a single state.
///
/// All successful (including no results at all) gives success. Otherwise
/// any failure gives a failure whose message joins each failure's
/// description in input order. What remains is cancellation only.
pub(crate) fn reduce<'a, I, R>(results: I) -> Aggregate
where
    I: IntoIterator<Item = &'a R>,
    R: Outcome + ?Sized + 'a,
{
    let results: Vec<&R> = results.into_iter().collect();

    if results.iter().all(|result| result.is_successful()) {
        tracing::trace!(total = results.len(), "all outcomes successful");
        return Aggregate::Success;
    }

    let failures: Vec<String> = results
        .iter()
        .filter(|result| result.is_failure())
        .map(|result| describe(*result))
        .collect();

    if failures.is_empty() {
        tracing::debug!(total = results.len(), "outcomes combined into cancellation");
        Aggregate::Cancelled
    } else {
        tracing::debug!(
            total = results.len(),
            failed = failures.len(),
            "outcomes combined into failure"
        );
        Aggregate::Failure(failures.join(COMBINED_MESSAGE_SEPARATOR))
    }
}

/// Full description of the attached error, or the message when there is none
fn describe<R: Outcome + ?Sized>(result: &R) -> String {
    match result.exception() {
        Some(error) => format!("{error:#}"),
        None => result.message().unwrap_or_default().to_string(),
    }
}
