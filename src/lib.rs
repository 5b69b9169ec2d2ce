//! ci-diff - Inspect the CI build a checkout is running under.
//!
//! Reads the environment variables set by Travis, CircleCI and AppVeyor,
//! combines them with git queries against the checkout, and reports the
//! build's branch, tag, pull request and the revision its changes should
//! be diffed against.
//!
//! # Modules
//!
//! - [`ci`] - Provider configurations and provider selection
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Environment variable access, detection and auditing
//! - [`error`] - Error types and result aliases
//! - [`git`] - Git queries against the checkout
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ci_diff::ci::{get_config, ActiveConfig};
//! use ci_diff::environment::MapEnv;
//! use ci_diff::shell::MockRunner;
//!
//! let env = MapEnv::from_pairs(&[
//!     ("TRAVIS", "true"),
//!     ("TRAVIS_EVENT_TYPE", "pull_request"),
//!     ("TRAVIS_BRANCH", "master"),
//! ]);
//! let ActiveConfig::Travis(travis) = get_config(Arc::new(env), Arc::new(MockRunner::new())) else {
//!     panic!("expected Travis");
//! };
//! assert_eq!(travis.base().unwrap(), "master");
//! ```

pub mod ci;
pub mod cli;
pub mod environment;
pub mod error;
pub mod git;
pub mod shell;
pub mod ui;

pub use error::{CiError, Result};
