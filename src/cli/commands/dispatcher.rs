//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::environment::{EnvSource, ProcessEnv};
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

/// Exit code used when no CI provider could be detected.
pub const EXIT_NO_PROVIDER: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The process exit status. Codes outside `0..=255` become 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Collaborators shared by every command.
#[derive(Clone)]
pub struct CommandContext {
    /// Where provider variables are read from.
    pub env: Arc<dyn EnvSource>,
    /// Runs git inside the checkout.
    pub runner: Arc<dyn CommandRunner>,
}

impl CommandContext {
    /// The process environment, with git run in `repo_root`.
    pub fn for_repo(repo_root: &Path) -> Self {
        Self {
            env: Arc::new(ProcessEnv),
            runner: Arc::new(SystemRunner::with_cwd(repo_root)),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    repo_root: PathBuf,
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given checkout.
    pub fn new(repo_root: PathBuf) -> Self {
        let context = CommandContext::for_repo(&repo_root);
        Self { repo_root, context }
    }

    /// Create a dispatcher with explicit collaborators.
    pub fn with_context(repo_root: PathBuf, context: CommandContext) -> Self {
        Self { repo_root, context }
    }

    /// Get the checkout path.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        match &cli.command {
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Changed(args)) => {
                super::changed::ChangedCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Files) => super::files::FilesCommand::new(ctx).execute(ui),
            Some(Commands::Env(args)) => super::env::EnvCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::show::ShowCommand::new(ctx, ShowArgs::default()).execute(ui),
        }
    }
}
