//! External command execution.
//!
//! Commands are run from an argument vector, never through a shell. Only
//! stdout is returned to callers; stderr is captured and logged.

use crate::error::{CiError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Raw outcome of running an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, decoded as UTF-8.
    pub stdout: String,

    /// Standard error, decoded as UTF-8.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// Apply the error policy and produce the trimmed stdout.
    ///
    /// A failed command yields `Ok(None)` when `ignore_errors` is set and
    /// [`CiError::CommandFailed`] otherwise.
    pub fn into_output(self, command: &str, ignore_errors: bool) -> Result<Option<String>> {
        if self.success {
            return Ok(Some(trim_line_terminator(&self.stdout).to_string()));
        }

        tracing::debug!(
            "`{}` exited with {:?}: {}",
            command,
            self.exit_code,
            self.stderr.trim_end()
        );
        if ignore_errors {
            Ok(None)
        } else {
            Err(CiError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
            })
        }
    }
}

/// Runs external commands and captures their output.
///
/// This is the seam between the git query layer and the operating system;
/// tests substitute [`MockRunner`](super::MockRunner).
pub trait CommandRunner: Send + Sync {
    /// Run `argv` and return its stdout with one trailing newline removed.
    ///
    /// A non-zero exit fails with [`CiError::CommandFailed`] unless
    /// `ignore_errors` is set, in which case the result is `Ok(None)`.
    fn run(&self, argv: &[&str], ignore_errors: bool) -> Result<Option<String>>;

    /// Directory the commands run in, when pinned.
    fn working_dir(&self) -> Option<&Path> {
        None
    }
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    cwd: Option<PathBuf>,
}

impl SystemRunner {
    /// Create a runner using the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner pinned to `cwd`.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }

    /// Execute `argv` and collect the raw result.
    pub fn execute(&self, argv: &[&str]) -> Result<CommandResult> {
        let command = display_command(argv);
        let (program, args) = argv.split_first().ok_or_else(|| CiError::CommandFailed {
            command: command.clone(),
            code: None,
        })?;

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::null());

        tracing::debug!("Running `{}`", command);
        let output = cmd.output().map_err(|e| {
            tracing::debug!("Failed to start `{}`: {}", command, e);
            CiError::CommandFailed {
                command: command.clone(),
                code: None,
            }
        })?;

        Ok(CommandResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[&str], ignore_errors: bool) -> Result<Option<String>> {
        let result = self.execute(argv)?;
        result.into_output(&display_command(argv), ignore_errors)
    }

    fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

/// Render an argument vector for messages.
pub fn display_command(argv: &[&str]) -> String {
    argv.join(" ")
}

/// Remove exactly one trailing `\n` (or `\r\n`).
pub fn trim_line_terminator(output: &str) -> &str {
    output
        .strip_suffix("\r\n")
        .or_else(|| output.strip_suffix('\n'))
        .unwrap_or(output)
}
