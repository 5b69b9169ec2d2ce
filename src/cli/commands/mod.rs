//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`], which hands each one the shared
//! [`CommandContext`].

pub mod changed;
pub mod completions;
pub mod dispatcher;
pub mod env;
pub mod files;
pub mod show;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult, EXIT_NO_PROVIDER};
