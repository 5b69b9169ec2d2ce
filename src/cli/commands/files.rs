//! Files command implementation.
//!
//! The `ci-diff files` command lists every file tracked in the checkout.

use crate::error::Result;
use crate::git::Git;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The files command implementation.
pub struct FilesCommand {
    context: CommandContext,
}

impl FilesCommand {
    /// Create a new files command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}

impl Command for FilesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let git = Git::new(self.context.runner.clone());
        for path in git.checked_in_files()? {
            ui.message(&path.display().to_string());
        }
        Ok(CommandResult::success())
    }
}
