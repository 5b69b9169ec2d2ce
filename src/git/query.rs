//! Typed git queries.
//!
//! Every query runs one fixed-form `git` command through a
//! [`CommandRunner`] and does no parsing beyond splitting on newlines or
//! whitespace.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{CiError, Result};
use crate::shell::CommandRunner;

/// Git queries against the repository the runner operates in.
#[derive(Clone)]
pub struct Git {
    runner: Arc<dyn CommandRunner>,
}

impl Git {
    /// Create a query layer over `runner`.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Root directory of the current checkout.
    pub fn repo_root(&self) -> Result<String> {
        self.output(&["git", "rev-parse", "--show-toplevel"])
    }

    /// Every file tracked under the repository root, as reported by git.
    pub fn tracked_files(&self) -> Result<Vec<String>> {
        let root = self.repo_root()?;
        let output = self.output(&["git", "ls-files", &root])?;
        Ok(split_lines(&output))
    }

    /// Tracked files as absolute paths.
    ///
    /// Paths reported by git are relative to the directory the command ran
    /// in, so they are joined onto the runner's working directory.
    pub fn checked_in_files(&self) -> Result<Vec<PathBuf>> {
        let base = match self.runner.working_dir() {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };
        Ok(self
            .tracked_files()?
            .into_iter()
            .map(|file| base.join(file))
            .collect())
    }

    /// Paths that differ between two revisions, in the order git reports.
    pub fn changed_files(&self, rev_a: &str, rev_b: &str) -> Result<Vec<String>> {
        let output = self.output(&["git", "diff", "--name-only", rev_a, rev_b])?;
        Ok(split_lines(&output))
    }

    /// Whether `revision` has more than one parent.
    ///
    /// Octopus merges (three or more parents) are not supported.
    pub fn is_merge_commit(&self, revision: &str) -> Result<bool> {
        let parents = self.output(&["git", "log", "--pretty=%P", "-1", revision])?;
        match parents.split_whitespace().count() {
            0 | 1 => Ok(false),
            2 => Ok(true),
            count => Err(CiError::unsupported(format!(
                "{} has {} parents; octopus merges are not supported",
                revision, count
            ))),
        }
    }

    /// First line of the commit message of `revision`.
    pub fn commit_subject(&self, revision: &str) -> Result<String> {
        self.output(&["git", "log", "--pretty=%s", "-1", revision])
    }

    /// Full hash for `reference`.
    ///
    /// With `ignore_errors`, a reference that does not resolve is `None`.
    pub fn resolve_revision(&self, reference: &str, ignore_errors: bool) -> Result<Option<String>> {
        self.runner
            .run(&["git", "rev-parse", reference], ignore_errors)
    }

    /// Common ancestor of two revisions.
    ///
    /// With `ignore_errors`, a failed lookup is `None`.
    pub fn merge_base(
        &self,
        rev_a: &str,
        rev_b: &str,
        ignore_errors: bool,
    ) -> Result<Option<String>> {
        self.runner
            .run(&["git", "merge-base", rev_a, rev_b], ignore_errors)
    }

    fn output(&self, argv: &[&str]) -> Result<String> {
        // Without ignore_errors a failure is an Err, never Ok(None).
        Ok(self.runner.run(argv, false)?.unwrap_or_default())
    }
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("working_dir", &self.runner.working_dir())
            .finish()
    }
}

/// Split command output into lines; empty output is an empty list.
pub fn split_lines(output: &str) -> Vec<String> {
    if output.is_empty() {
        return Vec::new();
    }
    output.split('\n').map(|line| line.to_string()).collect()
}
