//! Standalone present/absent shapes and the state contract shared with `Optional`

use super::option::Optional;
use crate::errors::{Error, Result};
use std::any::type_name;
use std::fmt;

/// Explicit has-value/no-value state
pub trait OptionalState {
    /// `true` when a value is held
    fn is_some(&self) -> bool;

    /// `true` when no value is held
    fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Name of the wrapped type, or `None` for the typeless empty marker
    fn underlying_type_name(&self) -> Option<&'static str>;
}

/// A value that is guaranteed to be present
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SomeValue<T>(T);

impl<T> SomeValue<T> {
    /// Wrap a present value
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Wrap a value that must be present, failing on absence
    pub fn try_new(value: Option<T>) -> Result<Self> {
        value.map(Self).ok_or_else(|| {
            Error::invariant_violation("cannot construct a present value from an absent value")
        })
    }

    /// Borrow the wrapped value
    pub const fn get(&self) -> &T {
        &self.0
    }

    /// Take the wrapped value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> OptionalState for SomeValue<T> {
    fn is_some(&self) -> bool {
        true
    }

    fn underlying_type_name(&self) -> Option<&'static str> {
        Some(type_name::<T>())
    }
}

impl<T> From<SomeValue<T>> for Optional<T> {
    fn from(value: SomeValue<T>) -> Self {
        Optional::Some(value.0)
    }
}

impl<T: fmt::Display> fmt::Display for SomeValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The typeless empty marker; converts into an empty `Optional` of any type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoneValue;

impl NoneValue {
    /// The shared empty marker
    pub const DEFAULT: NoneValue = NoneValue;
}

impl OptionalState for NoneValue {
    fn is_some(&self) -> bool {
        false
    }

    fn underlying_type_name(&self) -> Option<&'static str> {
        None
    }
}

impl<T> From<NoneValue> for Optional<T> {
    fn from(_: NoneValue) -> Self {
        Optional::None
    }
}

impl<T> OptionalState for Optional<T> {
    fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    fn underlying_type_name(&self) -> Option<&'static str> {
        Some(type_name::<T>())
    }
}

/// Wrap any value as a [`SomeValue`]
pub trait ToSome: Sized {
    /// Wrap `self` as a present value
    fn to_some(self) -> SomeValue<Self> {
        SomeValue::new(self)
    }
}

impl<T> ToSome for T {}

/// Build a present optional
pub fn some<T>(value: T) -> SomeValue<T> {
    SomeValue::new(value)
}

/// The empty marker
pub const fn none() -> NoneValue {
    NoneValue
}
