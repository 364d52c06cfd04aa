//! Optional values: explicit presence or absence without null
//!
//! - [`Optional`]: the two-state sum type with its query operations
//!   (`match_with`, `map`, `bind`, `filter`, ...).
//! - [`SomeValue`] / [`NoneValue`]: standalone shapes that convert into an
//!   `Optional` of the right type.
//! - [`OptionalFutureExt`]: async combinators for futures of optionals.

pub mod asynchronous;
pub mod option;
pub mod shapes;

pub use asynchronous::OptionalFutureExt;
pub use option::Optional;
pub use shapes::{none, some, NoneValue, OptionalState, SomeValue, ToSome};
