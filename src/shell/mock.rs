//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with scripted results and
//! records every invocation for later assertion.
//!
//! # Example
//!
//! ```
//! use ci_diff::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond(&["git", "rev-parse", "a"], "abcd");
//! runner.fail(&["git", "rev-parse", "b"], 128);
//!
//! assert_eq!(
//!     runner.run(&["git", "rev-parse", "a"], false).unwrap().as_deref(),
//!     Some("abcd")
//! );
//! assert!(runner.run(&["git", "rev-parse", "b"], true).unwrap().is_none());
//! assert_eq!(runner.call_count(&["git", "rev-parse", "a"]), 1);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{CiError, Result};

use super::command::{display_command, CommandResult, CommandRunner};

/// A recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The argument vector.
    pub argv: Vec<String>,
    /// Whether errors were ignored.
    pub ignore_errors: bool,
}

#[derive(Debug, Default)]
struct MockState {
    results: HashMap<Vec<String>, CommandResult>,
    calls: Vec<RecordedCall>,
}

/// Command runner returning scripted results.
///
/// An argument vector with no scripted result behaves like a program that
/// could not be started.
#[derive(Debug, Default)]
pub struct MockRunner {
    state: Mutex<MockState>,
}

impl MockRunner {
    /// Create a runner with no scripted results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful run printing `stdout` followed by a newline.
    pub fn respond(&self, argv: &[&str], stdout: &str) {
        self.script(argv, CommandResult::success(format!("{}\n", stdout)));
    }

    /// Script a run exiting with `code`.
    pub fn fail(&self, argv: &[&str], code: i32) {
        self.script(argv, CommandResult::failure(Some(code), ""));
    }

    /// Script an arbitrary result.
    pub fn script(&self, argv: &[&str], result: CommandResult) {
        let mut state = self.lock();
        state.results.insert(to_key(argv), result);
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Number of times `argv` was run.
    pub fn call_count(&self, argv: &[&str]) -> usize {
        let key = to_key(argv);
        self.lock().calls.iter().filter(|c| c.argv == key).count()
    }

    /// Total number of runs.
    pub fn total_calls(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A panicking test poisons the lock; the state is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, argv: &[&str], ignore_errors: bool) -> Result<Option<String>> {
        let command = display_command(argv);
        let result = {
            let mut state = self.lock();
            state.calls.push(RecordedCall {
                argv: to_key(argv),
                ignore_errors,
            });
            state.results.get(&to_key(argv)).cloned()
        };

        match result {
            Some(result) => result.into_output(&command, ignore_errors),
            None => Err(CiError::CommandFailed {
                command,
                code: None,
            }),
        }
    }
}

fn to_key(argv: &[&str]) -> Vec<String> {
    argv.iter().map(|s| s.to_string()).collect()
}
