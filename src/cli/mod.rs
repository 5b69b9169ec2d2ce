//! Command-line interface for ci-diff.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{ChangedArgs, Cli, Commands, CompletionsArgs, EnvArgs, ShowArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
