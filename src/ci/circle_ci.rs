//! CircleCI configuration.

use std::fmt;
use std::sync::Arc;

use crate::environment::{parse_optional_int, read_env, EnvSource, ProcessEnv};
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};

use super::cached::Cached;
use super::config::{CiConfig, ConfigBase, Property};
use super::repo_provider::RepoProvider;
use super::vars::{CIRCLE_CI_PR_NUM, CIRCLE_CI_REPO_URL, CIRCLE_CI_VARS};

/// CircleCI state with cached return values.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ci_diff::ci::{CiConfig, CircleCi, RepoProvider};
/// use ci_diff::environment::MapEnv;
/// use ci_diff::shell::MockRunner;
///
/// let env = MapEnv::from_pairs(&[
///     ("CIRCLECI", "true"),
///     ("CIRCLE_PR_NUMBER", "23"),
///     ("CIRCLE_BRANCH", "pull/23"),
///     ("CIRCLE_REPOSITORY_URL", "https://github.com/organization/repository"),
/// ]);
/// let config = CircleCi::new(Arc::new(env), Arc::new(MockRunner::new()));
/// assert_eq!(config.to_string(), "<CircleCI (active=true)>");
/// assert!(config.in_pull_request());
/// assert_eq!(config.pull_request(), Some(23));
/// assert_eq!(config.repository_provider().unwrap(), RepoProvider::GitHub);
/// ```
#[derive(Debug)]
pub struct CircleCi {
    common: ConfigBase,
    pull_request: Cached<Option<u64>>,
    repository_url: Cached<String>,
    repository_provider: Cached<RepoProvider>,
}

impl CircleCi {
    /// Create a configuration reading `env` and running git through `runner`.
    pub fn new(env: Arc<dyn EnvSource>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            common: ConfigBase::new(CIRCLE_CI_VARS, env, runner),
            pull_request: Cached::new(),
            repository_url: Cached::new(),
            repository_provider: Cached::new(),
        }
    }

    /// Create a configuration over the process environment and system git.
    pub fn from_process() -> Self {
        Self::new(Arc::new(ProcessEnv), Arc::new(SystemRunner::new()))
    }

    /// The pull request number, if building one.
    pub fn pull_request(&self) -> Option<u64> {
        *self
            .pull_request
            .get_or_init(|| parse_optional_int(self.common.env(), CIRCLE_CI_PR_NUM))
    }

    /// Whether the build is for a pull request.
    pub fn in_pull_request(&self) -> bool {
        self.pull_request().is_some()
    }

    /// URL of the repository being built, e.g.
    /// `https://github.com/{organization}/{repository}`.
    pub fn repository_url(&self) -> Result<&str> {
        self.repository_url
            .get_or_try_init(|| read_env(self.common.env(), CIRCLE_CI_REPO_URL, "a repo URL"))
            .map(String::as_str)
    }

    /// Hosting provider of [`repository_url`](Self::repository_url).
    pub fn repository_provider(&self) -> Result<RepoProvider> {
        self.repository_provider
            .get_or_try_init(|| RepoProvider::from_url(self.repository_url()?))
            .copied()
    }
}

impl CiConfig for CircleCi {
    fn name(&self) -> &'static str {
        "CircleCI"
    }

    fn common(&self) -> &ConfigBase {
        &self.common
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::ok("active", self.active()),
            Property::new("branch", self.branch()),
            Property::ok("in_pull_request", self.in_pull_request()),
            Property::new("is_merge", self.is_merge()),
            Property::ok("pull_request", self.pull_request()),
            Property::new("repository_provider", self.repository_provider()),
            Property::new("repository_url", self.repository_url()),
            Property::ok("tag", self.tag()),
        ]
    }
}

impl fmt::Display for CircleCi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} (active={})>", self.name(), self.active())
    }
}
