//! Env command implementation.
//!
//! The `ci-diff env <provider>` command prints the provider's variables
//! and fails when unknown ones appear.

use crate::cli::args::EnvArgs;
use crate::environment::audit_env;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The env command implementation.
pub struct EnvCommand {
    context: CommandContext,
    args: EnvArgs,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(context: CommandContext, args: EnvArgs) -> Self {
        Self { context, args }
    }
}

impl Command for EnvCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = audit_env(self.context.env.as_ref(), self.args.provider);
        ui.message(&report.to_json()?);

        if report.is_clean() {
            return Ok(CommandResult::success());
        }

        ui.error("Encountered unexpected variables");
        for name in &report.unexpected {
            ui.error(&format!("- {}", name));
        }
        Ok(CommandResult::failure(1))
    }
}
