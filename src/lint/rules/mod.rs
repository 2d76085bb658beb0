//! Built-in lint rules.
//!
//! This module contains all the built-in rules that come with notypos.

pub mod no_typos;

pub use no_typos::NoTyposRule;
