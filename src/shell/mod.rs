//! External command execution.

pub mod command;
pub mod mock;

pub use command::{display_command, trim_line_terminator, CommandResult, CommandRunner, SystemRunner};
pub use mock::{MockRunner, RecordedCall};
