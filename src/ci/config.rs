//! Shared configuration contract for CI providers.
//!
//! Every provider embeds a [`ConfigBase`] holding its variable names and
//! the cached `active`, `branch`, `is_merge` and `tag` fields, and
//! implements [`CiConfig`] on top of it.

use std::sync::Arc;

use serde::Serialize;

use crate::environment::{is_env_flag_true, read_env, read_optional, EnvSource};
use crate::error::Result;
use crate::git::Git;
use crate::shell::CommandRunner;

use super::cached::Cached;
use super::vars::ProviderVars;

/// Cached state common to every provider.
pub struct ConfigBase {
    vars: ProviderVars,
    env: Arc<dyn EnvSource>,
    git: Git,
    active: Cached<bool>,
    branch: Cached<String>,
    is_merge: Cached<bool>,
    tag: Cached<Option<String>>,
}

impl ConfigBase {
    /// Create an unevaluated base reading `vars` from `env`.
    pub fn new(vars: ProviderVars, env: Arc<dyn EnvSource>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            vars,
            env,
            git: Git::new(runner),
            active: Cached::new(),
            branch: Cached::new(),
            is_merge: Cached::new(),
            tag: Cached::new(),
        }
    }

    /// The provider's variable names.
    pub fn vars(&self) -> ProviderVars {
        self.vars
    }

    /// The environment the configuration reads from.
    pub fn env(&self) -> &dyn EnvSource {
        self.env.as_ref()
    }

    /// Git queries for the checkout being built.
    pub fn git(&self) -> &Git {
        &self.git
    }

    /// Whether the provider's marker variable is exactly `true`.
    pub fn active(&self) -> bool {
        *self.active.get_or_init(|| {
            let active = is_env_flag_true(self.env(), self.vars.active);
            tracing::debug!("{} = {}", self.vars.active, active);
            active
        })
    }

    /// The branch being built.
    ///
    /// Depending on the provider this is the pushed branch or the target
    /// branch of a pull request.
    pub fn branch(&self) -> Result<&str> {
        self.branch
            .get_or_try_init(|| read_env(self.env(), self.vars.branch, "an associated branch"))
            .map(String::as_str)
    }

    /// Whether HEAD is a merge commit.
    pub fn is_merge(&self) -> Result<bool> {
        self.is_merge
            .get_or_try_init(|| self.git.is_merge_commit("HEAD"))
            .copied()
    }

    /// The tag being built, if any. An empty value counts as unset.
    pub fn tag(&self) -> Option<&str> {
        self.tag
            .get_or_init(|| read_optional(self.env(), self.vars.tag))
            .as_deref()
    }
}

impl std::fmt::Debug for ConfigBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigBase")
            .field("vars", &self.vars)
            .field("active", &self.active)
            .field("branch", &self.branch)
            .field("is_merge", &self.is_merge)
            .field("tag", &self.tag)
            .finish()
    }
}

/// One reported configuration property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name.
    pub name: &'static str,
    /// The resolved value, or the error message from resolving it.
    pub value: std::result::Result<serde_json::Value, String>,
}

impl Property {
    /// Capture the outcome of reading a property.
    pub fn new<T: Serialize>(name: &'static str, value: Result<T>) -> Self {
        let value = value
            .map_err(|e| e.to_string())
            .and_then(|v| serde_json::to_value(v).map_err(|e| e.to_string()));
        Self { name, value }
    }

    /// Capture an infallible property.
    pub fn ok<T: Serialize>(name: &'static str, value: T) -> Self {
        Self::new(name, Ok(value))
    }
}

/// Common interface over every provider configuration.
pub trait CiConfig {
    /// Display name of the provider.
    fn name(&self) -> &'static str;

    /// The embedded shared state.
    fn common(&self) -> &ConfigBase;

    /// Whether currently running under this provider.
    fn active(&self) -> bool {
        self.common().active()
    }

    /// The branch being built.
    fn branch(&self) -> Result<&str> {
        self.common().branch()
    }

    /// Whether HEAD is a merge commit.
    fn is_merge(&self) -> Result<bool> {
        self.common().is_merge()
    }

    /// The tag being built, if any.
    fn tag(&self) -> Option<&str> {
        self.common().tag()
    }

    /// Revision to diff the build against.
    ///
    /// Defaults to the branch; providers with a richer notion of a base
    /// override this.
    fn diff_base(&self) -> Result<String> {
        self.branch().map(str::to_string)
    }

    /// Every property, resolved, sorted by name.
    fn properties(&self) -> Vec<Property> {
        vec![
            Property::ok("active", self.active()),
            Property::new("branch", self.branch()),
            Property::new("is_merge", self.is_merge()),
            Property::ok("tag", self.tag()),
        ]
    }
}
