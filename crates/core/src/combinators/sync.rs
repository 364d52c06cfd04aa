//! Synchronous reactions to an outcome's state

use crate::results::Outcome;

/// Chain behaviour off an outcome without branching at the call site.
///
/// Each step inspects the value produced by the previous step, so a failure
/// introduced by `on_success` is seen by a later `on_failure`.
pub trait OutcomeExt: Outcome + Sized {
    /// Replace a successful outcome with the result of `action`; any other
    /// outcome passes through untouched and `action` is not called
    fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.is_successful() {
            action(self)
        } else {
            self
        }
    }

    /// Observe a failure
    fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_failure() {
            action(&self);
        }
        self
    }

    /// Observe a cancellation
    fn on_cancelled<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_cancelled() {
            action(&self);
        }
        self
    }

    /// Observe the outcome whatever its state
    fn always<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }
}

impl<R: Outcome> OutcomeExt for R {}
