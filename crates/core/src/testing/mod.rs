//! Property-based testing utilities for outcomes and optionals
//!
//! The generators are public behind the `testing` feature so downstream
//! crates can drive their own properties with arbitrary outcomes.

use crate::optional::Optional;
use crate::results::{OperationResult, ServiceResult};
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Generate short failure messages
    pub fn failure_message() -> impl Strategy<Value = String> {
        "[a-z][a-z ]{0,15}"
    }

    /// Generate payload-free operation results in every state
    pub fn operation_result() -> impl Strategy<Value = OperationResult> {
        prop_oneof![
            Just(OperationResult::success(crate::Unit)),
            "[a-z]{1,8}".prop_map(OperationResult::success_message),
            Just(OperationResult::cancelled()),
            failure_message().prop_map(OperationResult::failure_message),
        ]
    }

    /// Generate payload-free service results in every state
    pub fn service_result() -> impl Strategy<Value = ServiceResult> {
        prop_oneof![
            Just(ServiceResult::success(crate::Unit)),
            Just(ServiceResult::cancelled()),
            (failure_message(), 400u16..600)
                .prop_map(|(message, code)| ServiceResult::failure_message_with_status(message, code)),
        ]
    }

    /// Generate lists of operation results, including the empty list
    pub fn operation_results() -> impl Strategy<Value = Vec<OperationResult>> {
        vec(operation_result(), 0..=16)
    }

    /// Generate optionals around `element`
    pub fn optional<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Optional<T>> {
        proptest::option::of(element).prop_map(Optional::from)
    }
}

/// Property-based tests
#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use crate::results::{Outcome, ServiceOutcome};
    use proptest::proptest;
    use std::cell::Cell;

    proptest! {
        /// Combining reports success iff every input succeeded
        #[test]
        fn combine_success_iff_all_succeed(results in operation_results()) {
            let combined = OperationResult::combine(&results);
            let all_succeeded = results.iter().all(Outcome::is_successful);
            prop_assert_eq!(combined.is_successful(), all_succeeded);
        }

        /// A combined failure lists every failure message in input order
        #[test]
        fn combine_joins_failures_in_order(results in operation_results()) {
            let combined = OperationResult::combine(&results);
            let failures: Vec<&str> = results
                .iter()
                .filter(|r| r.is_failure())
                .filter_map(Outcome::message)
                .collect();

            if failures.is_empty() {
                prop_assert!(!combined.is_failure());
            } else {
                prop_assert!(combined.is_failure());
                let expected = failures.join("\n");
                prop_assert_eq!(combined.message(), Some(expected.as_str()));
            }
        }

        /// Cancellation wins only when nothing failed and something cancelled
        #[test]
        fn combine_cancel_without_failures(results in operation_results()) {
            let combined = OperationResult::combine(&results);
            let any_failed = results.iter().any(Outcome::is_failure);
            let any_cancelled = results.iter().any(Outcome::is_cancelled);
            prop_assert_eq!(combined.is_cancelled(), !any_failed && any_cancelled);
        }

        /// Service combine follows the same state rules and reports 500 on failure
        #[test]
        fn service_combine_status_codes(results in proptest::collection::vec(service_result(), 0..8)) {
            let combined = ServiceResult::combine(&results);
            if combined.is_failure() {
                prop_assert_eq!(combined.status_code(), Some(500));
            } else if combined.is_successful() {
                prop_assert_eq!(combined.status_code(), Some(200));
            } else {
                prop_assert_eq!(combined.status_code(), None);
            }
        }

        /// Exactly one of the three predicates holds
        #[test]
        fn outcome_states_are_exclusive(result in operation_result()) {
            let states = [result.is_successful(), result.is_cancelled(), result.is_failure()];
            prop_assert_eq!(states.iter().filter(|s| **s).count(), 1);
        }

        /// `unwrap_or` never fails and falls back only on absence
        #[test]
        fn unwrap_or_falls_back_on_absence(value in optional(any::<i64>()), fallback in any::<i64>()) {
            let expected = value.into_option().unwrap_or(fallback);
            prop_assert_eq!(value.unwrap_or(fallback), expected);
        }

        /// Matching with the identity and a constant recovers the value or the constant
        #[test]
        fn match_round_trip(value in optional(any::<u32>()), fallback in any::<u32>()) {
            let matched = value.match_with(|x| x, || fallback);
            prop_assert_eq!(matched, value.unwrap_or(fallback));
        }

        /// Mapping an empty optional never calls the function
        #[test]
        fn map_skips_absent_values(value in optional(any::<i32>())) {
            let calls = Cell::new(0);
            let mapped = value.map(|x| {
                calls.set(calls.get() + 1);
                x.wrapping_mul(2)
            });
            prop_assert_eq!(calls.get(), usize::from(value.is_some()));
            prop_assert_eq!(mapped.is_some(), value.is_some());
        }

        /// `None` orders before every present value
        #[test]
        fn none_sorts_first(value in any::<i16>()) {
            prop_assert!(Optional::None < Optional::Some(value));
            prop_assert_eq!(Optional::<i16>::None.cmp_value(&value), std::cmp::Ordering::Less);
        }
    }
}
