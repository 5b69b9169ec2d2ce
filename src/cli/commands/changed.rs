//! Changed command implementation.
//!
//! The `ci-diff changed` command lists the files that differ between the
//! build's diff base and a head revision.

use crate::ci::get_config;
use crate::cli::args::ChangedArgs;
use crate::error::Result;
use crate::git::Git;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_NO_PROVIDER};

/// The changed command implementation.
pub struct ChangedCommand {
    context: CommandContext,
    args: ChangedArgs,
}

impl ChangedCommand {
    /// Create a new changed command.
    pub fn new(context: CommandContext, args: ChangedArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ChangedArgs {
        &self.args
    }

    fn resolve_base(&self, ui: &mut dyn UserInterface) -> Result<Option<String>> {
        if let Some(base) = &self.args.base {
            return Ok(Some(base.clone()));
        }

        let active = get_config(self.context.env.clone(), self.context.runner.clone());
        match active.as_config() {
            Some(config) => {
                let base = config.diff_base()?;
                if ui.output_mode().shows_detail() {
                    ui.success(&format!("{} diff base: {}", config.name(), base));
                }
                Ok(Some(base))
            }
            None => Ok(None),
        }
    }
}

impl Command for ChangedCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(base) = self.resolve_base(ui)? else {
            ui.error("No CI provider detected; pass --base to choose a revision");
            return Ok(CommandResult::failure(EXIT_NO_PROVIDER));
        };

        let git = Git::new(self.context.runner.clone());
        for path in git.changed_files(&base, &self.args.head)? {
            ui.message(&path);
        }

        Ok(CommandResult::success())
    }
}
