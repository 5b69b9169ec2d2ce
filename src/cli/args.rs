//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::environment::AuditTarget;

/// ci-diff - Inspect the CI build a checkout is running under.
#[derive(Debug, Parser)]
#[command(name = "ci-diff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the git checkout (overrides current directory)
    #[arg(short, long, global = true, env = "CI_DIFF_REPO")]
    pub repo: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the detected provider and its build properties (default)
    Show(ShowArgs),

    /// List files changed between the diff base and HEAD
    Changed(ChangedArgs),

    /// List files checked into the repository
    Files,

    /// Print and check a provider's environment variables
    Env(EnvArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `changed` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ChangedArgs {
    /// Revision to diff against (defaults to the provider's diff base)
    #[arg(long, value_name = "REV")]
    pub base: Option<String>,

    /// Revision to diff up to
    #[arg(long, value_name = "REV", default_value = "HEAD")]
    pub head: String,
}

impl Default for ChangedArgs {
    fn default() -> Self {
        Self {
            base: None,
            head: "HEAD".to_string(),
        }
    }
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EnvArgs {
    /// Provider whose variables to check
    #[arg(value_enum)]
    pub provider: AuditTarget,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
