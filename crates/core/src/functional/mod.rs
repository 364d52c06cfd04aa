//! Functional programming utilities shared by the optional and outcome types

pub mod action;

pub use action::{to_func, to_func_mut, to_thunk};
