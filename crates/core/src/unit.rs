//! The zero-information marker value

use std::fmt;

/// A type with exactly one value, used where a combinator has to return
/// something but has nothing to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

impl Unit {
    /// The one value of this type
    pub const DEFAULT: Unit = Unit;

    /// Substitute `value` for unit
    #[must_use]
    pub fn returning<T>(self, value: T) -> T {
        value
    }

    /// Substitute the value produced by `f` for unit
    pub fn returning_with<T, F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        f()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_all_units_are_equal() {
        assert_eq!(Unit, Unit::DEFAULT);
        assert_eq!(Unit::default(), Unit::from(()));
        assert_eq!(Unit.cmp(&Unit::DEFAULT), Ordering::Equal);
    }

    #[test]
    fn test_returning() {
        assert_eq!(Unit.returning(5), 5);
        assert_eq!(Unit.returning_with(|| "lazy"), "lazy");
        assert_eq!(Unit.to_string(), "()");
    }
}
