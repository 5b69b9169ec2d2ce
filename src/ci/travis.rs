//! Travis CI configuration.
//!
//! Since Travis only builds GitHub repositories, this configuration is
//! GitHub and `git` centric. It reads:
//!
//! - `TRAVIS`: whether running in Travis
//! - `TRAVIS_BRANCH`: the pushed branch, or the target branch of a PR
//! - `TRAVIS_EVENT_TYPE`: what triggered the build
//! - `TRAVIS_PULL_REQUEST`: the PR number, or `false` for other builds
//! - `TRAVIS_COMMIT_RANGE`: the `start..finish` range of a push build
//! - `TRAVIS_REPO_SLUG`, `TRAVIS_TAG`

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::environment::{parse_optional_int, read_env, EnvSource, ProcessEnv};
use crate::error::{CiError, Result};
use crate::git::{pull_request_from_subject, Git};
use crate::shell::{CommandRunner, SystemRunner};

use super::cached::Cached;
use super::config::{CiConfig, ConfigBase, Property};
use super::vars::{TRAVIS_EVENT_TYPE, TRAVIS_PR, TRAVIS_RANGE, TRAVIS_SLUG, TRAVIS_VARS};

const RANGE_DELIMITER: &str = "..";

/// What triggered a Travis build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Api,
    Cron,
    PullRequest,
    Push,
}

impl EventType {
    /// Every event type.
    pub const ALL: [EventType; 4] = [
        EventType::Api,
        EventType::Cron,
        EventType::PullRequest,
        EventType::Push,
    ];

    /// The value Travis uses for this event.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Cron => "cron",
            Self::PullRequest => "pull_request",
            Self::Push => "push",
        }
    }
}

impl FromStr for EventType {
    type Err = CiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| CiError::InvalidEventType {
                value: s.to_string(),
                valid: Self::ALL.map(|e| e.as_str()).join(", "),
            })
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travis state with cached return values.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ci_diff::ci::{CiConfig, EventType, Travis};
/// use ci_diff::environment::MapEnv;
/// use ci_diff::shell::MockRunner;
///
/// let env = MapEnv::from_pairs(&[
///     ("TRAVIS", "true"),
///     ("TRAVIS_EVENT_TYPE", "pull_request"),
///     ("TRAVIS_BRANCH", "master"),
/// ]);
/// let config = Travis::new(Arc::new(env), Arc::new(MockRunner::new()));
/// assert!(config.active());
/// assert_eq!(config.event_type().unwrap(), EventType::PullRequest);
/// assert_eq!(config.base().unwrap(), "master");
/// ```
#[derive(Debug)]
pub struct Travis {
    common: ConfigBase,
    pull_request: Cached<Option<u64>>,
    event_type: Cached<EventType>,
    base: Cached<String>,
    merged_pull_request: Cached<Option<u64>>,
    slug: Cached<String>,
}

impl Travis {
    /// Create a configuration reading `env` and running git through `runner`.
    pub fn new(env: Arc<dyn EnvSource>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            common: ConfigBase::new(TRAVIS_VARS, env, runner),
            pull_request: Cached::new(),
            event_type: Cached::new(),
            base: Cached::new(),
            merged_pull_request: Cached::new(),
            slug: Cached::new(),
        }
    }

    /// Create a configuration over the process environment and system git.
    pub fn from_process() -> Self {
        Self::new(Arc::new(ProcessEnv), Arc::new(SystemRunner::new()))
    }

    /// The pull request number, if building one.
    ///
    /// Travis sets `TRAVIS_PULL_REQUEST=false` outside pull requests, which
    /// is reported as `None`.
    pub fn pull_request(&self) -> Option<u64> {
        *self
            .pull_request
            .get_or_init(|| parse_optional_int(self.common.env(), TRAVIS_PR))
    }

    /// What triggered the build.
    pub fn event_type(&self) -> Result<EventType> {
        self.event_type
            .get_or_try_init(|| {
                read_env(self.common.env(), TRAVIS_EVENT_TYPE, "an event type")?.parse()
            })
            .copied()
    }

    /// Whether the build is for a pull request.
    pub fn in_pull_request(&self) -> Result<bool> {
        Ok(self.event_type()? == EventType::PullRequest)
    }

    /// The commit or branch the build's changes should be diffed against.
    ///
    /// - pull request builds: the target branch
    /// - push builds: the start of the pushed commit range, when the push
    ///   was a fast-forward
    /// - other builds: unsupported
    pub fn base(&self) -> Result<&str> {
        self.base
            .get_or_try_init(|| {
                let base = match self.event_type()? {
                    EventType::PullRequest => self.branch()?.to_string(),
                    EventType::Push => push_build_base(self.common.env(), self.common.git())?,
                    other => {
                        return Err(CiError::unsupported(format!(
                            "there is no diff base for {} builds",
                            other
                        )))
                    }
                };
                tracing::debug!("Travis diff base: {}", base);
                Ok(base)
            })
            .map(String::as_str)
    }

    /// The pull request merged by HEAD, if HEAD is a merge commit whose
    /// subject names exactly one PR.
    pub fn merged_pull_request(&self) -> Result<Option<u64>> {
        self.merged_pull_request
            .get_or_try_init(|| {
                if !self.is_merge()? {
                    return Ok(None);
                }
                let subject = self.common.git().commit_subject("HEAD")?;
                Ok(pull_request_from_subject(&subject))
            })
            .copied()
    }

    /// The `owner/repository` slug being built.
    pub fn slug(&self) -> Result<&str> {
        self.slug
            .get_or_try_init(|| read_env(self.common.env(), TRAVIS_SLUG, "a repository slug"))
            .map(String::as_str)
    }
}

impl CiConfig for Travis {
    fn name(&self) -> &'static str {
        "Travis"
    }

    fn common(&self) -> &ConfigBase {
        &self.common
    }

    fn diff_base(&self) -> Result<String> {
        self.base().map(str::to_string)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::ok("active", self.active()),
            Property::new("base", self.base()),
            Property::new("branch", self.branch()),
            Property::new("event_type", self.event_type()),
            Property::new("in_pull_request", self.in_pull_request()),
            Property::new("is_merge", self.is_merge()),
            Property::new("merged_pull_request", self.merged_pull_request()),
            Property::ok("pull_request", self.pull_request()),
            Property::new("slug", self.slug()),
            Property::ok("tag", self.tag()),
        ]
    }
}

impl fmt::Display for Travis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} (active={})>", self.name(), self.active())
    }
}

/// Resolve the diff base of a push build from its commit range.
///
/// The start of the range is the base only when it is still an ancestor of
/// the pushed commits. A start that no longer resolves (a force push that
/// removed it) is unsupported; a start that is no longer the merge base
/// (rewritten history) is indeterminate.
fn push_build_base(env: &dyn EnvSource, git: &Git) -> Result<String> {
    let range = read_env(env, TRAVIS_RANGE, "a commit range")?;
    let (start, finish) =
        range
            .split_once(RANGE_DELIMITER)
            .ok_or_else(|| CiError::MalformedCommitRange {
                value: range.clone(),
            })?;

    let start_full = git.resolve_revision(start, true)?.ok_or_else(|| {
        CiError::unsupported(format!(
            "start commit {} of range {} does not resolve; force pushes are not handled",
            start, range
        ))
    })?;

    let merge_base = git.merge_base(&start_full, finish, true)?;
    if merge_base.as_deref() == Some(start_full.as_str()) {
        Ok(start_full)
    } else {
        Err(CiError::Indeterminate {
            what: "the push base".to_string(),
            message: format!(
                "merge base of {} and {} is {:?}, not the start of the range",
                start_full, finish, merge_base
            ),
        })
    }
}

/// Whether running in Travis, using the process environment.
pub fn in_travis() -> bool {
    Travis::from_process().active()
}

/// Whether running a Travis pull request build, using the process
/// environment.
pub fn in_travis_pr() -> Result<bool> {
    Travis::from_process().in_pull_request()
}

/// The Travis branch, using the process environment.
pub fn travis_branch() -> Result<String> {
    Travis::from_process().branch().map(str::to_string)
}
