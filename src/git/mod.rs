//! Version-control queries.
//!
//! - [`Git`] runs fixed-form `git` commands through a
//!   [`CommandRunner`](crate::shell::CommandRunner)
//! - [`pull_request_from_subject`] reads PR numbers out of merge commits

pub mod query;
pub mod subject;

pub use query::{split_lines, Git};
pub use subject::pull_request_from_subject;
