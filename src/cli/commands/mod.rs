//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands (`notypos lint`, `notypos rules`) to their implementations.

pub mod completions;
pub mod dispatcher;
pub mod lint;
pub mod rules;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
