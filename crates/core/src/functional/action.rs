//! Adapters turning side-effecting procedures into `Unit`-returning functions
//!
//! A procedure of several arguments is expressed as a closure over a tuple,
//! so a single adapter covers every arity.

use crate::unit::Unit;

/// Wrap a one-shot procedure so that it returns [`Unit`]
pub fn to_func<Args, F>(action: F) -> impl FnOnce(Args) -> Unit
where
    F: FnOnce(Args),
{
    move |args| {
        action(args);
        Unit
    }
}

/// Wrap a reusable procedure so that it returns [`Unit`]
pub fn to_func_mut<Args, F>(mut action: F) -> impl FnMut(Args) -> Unit
where
    F: FnMut(Args),
{
    move |args| {
        action(args);
        Unit
    }
}

/// Wrap a procedure taking no arguments so that it returns [`Unit`]
pub fn to_thunk<F>(action: F) -> impl FnOnce() -> Unit
where
    F: FnOnce(),
{
    move || {
        action();
        Unit
    }
}
