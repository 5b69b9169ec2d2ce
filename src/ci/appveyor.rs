//! AppVeyor configuration.

use std::fmt;
use std::sync::Arc;

use crate::environment::{parse_optional_int, EnvSource, ProcessEnv};
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};

use super::cached::Cached;
use super::config::{CiConfig, ConfigBase, Property};
use super::repo_provider::AppVeyorRepoProvider;
use super::vars::{APPVEYOR_PR_NUM, APPVEYOR_REPO_PROVIDER, APPVEYOR_VARS};

/// AppVeyor state with cached return values.
#[derive(Debug)]
pub struct AppVeyor {
    common: ConfigBase,
    pull_request: Cached<Option<u64>>,
    repository_provider: Cached<AppVeyorRepoProvider>,
}

impl AppVeyor {
    /// Create a configuration reading `env` and running git through `runner`.
    pub fn new(env: Arc<dyn EnvSource>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            common: ConfigBase::new(APPVEYOR_VARS, env, runner),
            pull_request: Cached::new(),
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
            .get_or_init(|| parse_optional_int(self.common.env(), APPVEYOR_PR_NUM))
    }

    /// Whether the build is for a pull request.
    pub fn in_pull_request(&self) -> bool {
        self.pull_request().is_some()
    }

    /// The code hosting provider AppVeyor reports for the build.
    ///
    /// An unset variable is treated like an empty, invalid name.
    pub fn repository_provider(&self) -> Result<AppVeyorRepoProvider> {
        self.repository_provider
            .get_or_try_init(|| {
                self.common
                    .env()
                    .var(APPVEYOR_REPO_PROVIDER)
                    .unwrap_or_default()
                    .parse()
            })
            .copied()
    }
}

impl CiConfig for AppVeyor {
    fn name(&self) -> &'static str {
        "AppVeyor"
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
            Property::ok("tag", self.tag()),
        ]
    }
}

impl fmt::Display for AppVeyor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} (active={})>", self.name(), self.active())
    }
}
