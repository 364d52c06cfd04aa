//! The `Optional<T>` sum type and its query operations

use crate::errors::{Error, Result};
use crate::functional::{to_func, to_thunk};
use crate::unit::Unit;
use std::cmp::Ordering;
use std::fmt;

/// Explicit presence or absence of a value.
///
/// `None` is declared first so that the derived ordering places it before
/// every `Some`; two `Some` values order by their contents. Equality holds
/// when both are `None` or both wrap equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value held
    None,
    /// Exactly one value held
    Some(T),
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> Optional<T> {
    /// The empty optional
    pub const fn none() -> Self {
        Optional::None
    }

    /// Wrap a value that is known to be present
    pub const fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// Wrap a value that must be present.
    ///
    /// An absent value is a programming error and is reported as
    /// [`Error::InvariantViolation`] instead of silently becoming `None`.
    pub fn try_some(value: Option<T>) -> Result<Self> {
        value.map(Optional::Some).ok_or_else(|| {
            Error::invariant_violation("cannot construct a present optional from an absent value")
        })
    }

    /// `true` when a value is held
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// `true` when no value is held
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrow the contents
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Invoke exactly one branch and return its result
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Optional::Some(value) => on_some(value),
            Optional::None => on_none(),
        }
    }

    /// Side-effecting form of [`match_with`](Self::match_with)
    pub fn match_do<S, N>(self, on_some: S, on_none: N) -> Unit
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        self.match_with(to_func(on_some), to_thunk(on_none))
    }

    /// Transform the held value, keeping absence as absence
    #[doc(alias = "select")]
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        self.match_with(|value| Optional::Some(f(value)), Optional::none)
    }

    /// Chain a computation that itself may produce no value
    #[doc(alias = "select_many")]
    #[doc(alias = "flat_map")]
    pub fn bind<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        self.match_with(f, Optional::none)
    }

    /// Keep the value only when `predicate` accepts it
    #[doc(alias = "where")]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.match_with(
            |value| {
                if predicate(&value) {
                    Optional::Some(value)
                } else {
                    Optional::None
                }
            },
            Optional::none,
        )
    }

    /// Run `action` on the held value, recording that it ran
    pub fn for_each<F>(self, action: F) -> Optional<Unit>
    where
        F: FnOnce(T),
    {
        self.map(to_func(action))
    }

    /// Run `handler` only when a value is held
    pub fn if_some<F>(self, handler: F) -> Unit
    where
        F: FnOnce(T),
    {
        self.match_with(to_func(handler), || Unit)
    }

    /// Run `handler` when a value is held, otherwise produce `R::default()`
    pub fn if_some_or_default<R, F>(self, handler: F) -> R
    where
        R: Default,
        F: FnOnce(T) -> R,
    {
        self.match_with(handler, R::default)
    }

    /// Run `handler` only when no value is held
    pub fn if_none<F>(self, handler: F) -> Unit
    where
        F: FnOnce(),
    {
        self.match_with(|_| Unit, to_thunk(handler))
    }

    /// Run `handler` when no value is held, otherwise produce `R::default()`
    pub fn if_none_or_default<R, F>(self, handler: F) -> R
    where
        R: Default,
        F: FnOnce() -> R,
    {
        self.match_with(|_| R::default(), handler)
    }

    /// The held value, or `default` when absent. Never fails.
    #[doc(alias = "unwrap")]
    pub fn unwrap_or(self, default: T) -> T {
        self.match_with(|value| value, || default)
    }

    /// The held value, or `T::default()` when absent
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.match_with(|value| value, T::default)
    }

    /// Borrow the held value.
    ///
    /// Reading an absent optional is reported as [`Error::InvalidState`];
    /// callers are expected to have checked [`is_some`](Self::is_some).
    pub fn value(&self) -> Result<&T> {
        self.as_ref().match_with(Ok, || Err(absent_value()))
    }

    /// Take the held value, see [`value`](Self::value)
    pub fn into_value(self) -> Result<T> {
        self.match_with(Ok, || Err(absent_value()))
    }

    /// A zero-or-one element iterator over the held value.
    ///
    /// Each call builds a fresh iterator from the current state.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Convert into the standard library option
    pub fn into_option(self) -> Option<T> {
        self.match_with(Some, || None)
    }

    /// Compare against a bare value: equal only when present and equal
    pub fn eq_value(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_ref().match_with(|value| value == other, || false)
    }

    /// Order against a bare value: absence sorts before any value
    pub fn cmp_value(&self, other: &T) -> Ordering
    where
        T: Ord,
    {
        self.as_ref()
            .match_with(|value| value.cmp(other), || Ordering::Less)
    }
}

fn absent_value() -> Error {
    Error::invalid_state("attempted to read the value of an empty optional")
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(value) => value.fmt(f),
            Optional::None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_some_and_none_states() {
        let some = Optional::some(42);
        let none: Optional<i32> = Optional::none();

        assert!(some.is_some());
        assert!(!some.is_none());
        assert!(none.is_none());
        assert!(!none.is_some());
    }

    #[test]
    fn test_try_some_rejects_absent_value() {
        let error = Optional::<i32>::try_some(None).unwrap_err();
        assert!(matches!(error, Error::InvariantViolation { .. }));

        assert_eq!(Optional::try_some(Some(1)).unwrap(), Optional::Some(1));
    }

    #[test]
    fn test_promotion_from_std_option() {
        assert_eq!(Optional::from(Some("x")), Optional::Some("x"));
        assert_eq!(Optional::<&str>::from(None), Optional::None);
    }

    #[test]
    fn test_match_round_trip() {
        assert_eq!(Optional::some(7).match_with(|x| x, || 0), 7);
        assert_eq!(Optional::<i32>::none().match_with(|x| x, || -1), -1);
    }

    #[test]
    fn test_map_never_runs_on_none() {
        let calls = Cell::new(0);
        let mapped = Optional::<i32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(mapped, Optional::None);
        assert_eq!(calls.get(), 0);
        assert_eq!(Optional::some(4).map(|x| x * 2), Optional::Some(8));
    }

    #[test]
    fn test_bind_flattens() {
        let half = |x: i32| {
            if x % 2 == 0 {
                Optional::some(x / 2)
            } else {
                Optional::none()
            }
        };

        assert_eq!(Optional::some(8).bind(half), Optional::Some(4));
        assert_eq!(Optional::some(3).bind(half), Optional::None);
        assert_eq!(Optional::none().bind(half), Optional::None);
    }

    #[test]
    fn test_filter() {
        assert_eq!(Optional::some(5).filter(|x| *x > 3), Optional::Some(5));
        assert_eq!(Optional::some(2).filter(|x| *x > 3), Optional::None);
        assert_eq!(Optional::<i32>::none().filter(|_| true), Optional::None);
    }

    #[test]
    fn test_side_effect_handlers() {
        let seen = Cell::new(0);
        assert_eq!(Optional::some(3).if_some(|x| seen.set(x)), Unit);
        assert_eq!(seen.get(), 3);

        let fired = Cell::new(false);
        Optional::some(1).if_none(|| fired.set(true));
        assert!(!fired.get());
        Optional::<i32>::none().if_none(|| fired.set(true));
        assert!(fired.get());

        assert_eq!(Optional::<i32>::none().if_some_or_default(|x| x + 1), 0);
        assert_eq!(Optional::some(1).if_none_or_default(|| 9), 0);
        assert_eq!(Optional::some(1).for_each(|_| {}), Optional::Some(Unit));
    }

    #[test]
    fn test_unwrap_or_and_value() {
        assert_eq!(Optional::some(10).unwrap_or(0), 10);
        assert_eq!(Optional::none().unwrap_or(0), 0);
        assert_eq!(Optional::<String>::none().unwrap_or_default(), "");

        assert_eq!(Optional::some(1).value(), Ok(&1));
        let error = Optional::<i32>::none().value().unwrap_err();
        assert!(matches!(error, Error::InvalidState { .. }));
        assert!(Optional::<i32>::none().into_value().is_err());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let some = Optional::some("a");
        assert_eq!(some.iter().count(), 1);
        assert_eq!(some.iter().count(), 1);
        assert_eq!(some.iter().next(), Some(&"a"));

        let none: Optional<&str> = Optional::none();
        assert_eq!(none.iter().count(), 0);
        assert_eq!((&none).into_iter().count(), 0);
        assert_eq!(some.into_iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_equality_and_ordering() {
        assert_eq!(Optional::<i32>::none(), Optional::none());
        assert_ne!(Optional::some(1), Optional::none());
        assert_ne!(Optional::some(1), Optional::some(2));

        assert!(Optional::none() < Optional::some(i32::MIN));
        assert!(Optional::some(1) < Optional::some(2));

        assert!(Optional::some(3).eq_value(&3));
        assert!(!Optional::none().eq_value(&3));
        assert_eq!(Optional::none().cmp_value(&3), Ordering::Less);
        assert_eq!(Optional::some(4).cmp_value(&3), Ordering::Greater);
    }

    #[test]
    fn test_display() {
        assert_eq!(Optional::some(5).to_string(), "5");
        assert_eq!(Optional::<i32>::none().to_string(), "None");
    }
}
