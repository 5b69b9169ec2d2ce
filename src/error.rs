//! Error types for ci-diff operations.
//!
//! This module defines [`CiError`], the single error type returned by every
//! configuration property, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Nothing is caught or retried internally: every error reaches the caller
//!   of the property that needed the value
//! - `Unsupported` marks scenarios that are deliberately not handled,
//!   `Indeterminate` marks well-formed inputs with no computable answer
//! - Use `anyhow::Error` (via `CiError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for ci-diff operations.
#[derive(Debug, Error)]
pub enum CiError {
    /// A required environment variable is unset.
    #[error("Build does not have {what} set (via {var})")]
    MissingEnvVar { var: String, what: String },

    /// External command exited non-zero (or could not be started).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Repository URL contains a known host but not its expected prefix.
    #[error("Repository URL {url} contained host {host} but did not begin with expected prefix {expected_prefix}")]
    UnexpectedRepoPrefix {
        url: String,
        host: String,
        expected_prefix: String,
    },

    /// Repository URL matches none of the known hosts.
    #[error("Invalid repo URL {url}: expected a URL for one of {valid}")]
    UnknownRepoHost { url: String, valid: String },

    /// Repository provider name is not one of the known values.
    #[error("Invalid repo provider '{value}': expected one of {valid}")]
    InvalidRepoProvider { value: String, valid: String },

    /// Event type is not one of the known values.
    #[error("Invalid event type '{value}': expected one of {valid}")]
    InvalidEventType { value: String, valid: String },

    /// Commit range is missing the `..` delimiter.
    #[error("Malformed commit range '{value}': expected <start>..<finish>")]
    MalformedCommitRange { value: String },

    /// A scenario that is explicitly not handled.
    #[error("Unsupported: {message}")]
    Unsupported { message: String },

    /// Inputs are well-formed but the answer cannot be determined.
    #[error("Cannot determine {what}: {message}")]
    Indeterminate { what: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CiError {
    /// Build an [`CiError::Unsupported`] from a message.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

/// Result type alias for ci-diff operations.
pub type Result<T> = std::result::Result<T, CiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_var_displays_var_and_what() {
        let err = CiError::MissingEnvVar {
            var: "TRAVIS_BRANCH".into(),
            what: "an associated branch".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("TRAVIS_BRANCH"));
        assert!(msg.contains("an associated branch"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = CiError::CommandFailed {
            command: "git merge-base a b".into(),
            code: Some(128),
        };
        let msg = err.to_string();
        assert!(msg.contains("git merge-base a b"));
        assert!(msg.contains("128"));
    }

    #[test]
    fn unexpected_repo_prefix_displays_host_and_prefix() {
        let err = CiError::UnexpectedRepoPrefix {
            url: "git://github.com/a/b".into(),
            host: "github.com".into(),
            expected_prefix: "https://github.com/".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git://github.com/a/b"));
        assert!(msg.contains("https://github.com/"));
    }

    #[test]
    fn unknown_repo_host_lists_valid_names() {
        let err = CiError::UnknownRepoHost {
            url: "https://gitlab.com/a/b".into(),
            valid: "github, bitbucket".into(),
        };
        assert!(err.to_string().contains("github, bitbucket"));
    }

    #[test]
    fn unsupported_helper_builds_variant() {
        let err = CiError::unsupported("octopus merge");
        assert!(matches!(err, CiError::Unsupported { .. }));
        assert!(err.to_string().contains("octopus merge"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "git missing");
        let err: CiError = io_err.into();
        assert!(matches!(err, CiError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CiError::MalformedCommitRange {
                value: "abc".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
