//! CI provider configurations.
//!
//! Each provider exposes lazily computed, cached properties describing the
//! build: branch, tag, pull request, merge status and the revision to diff
//! against. [`get_config`] picks the configuration for the provider the
//! build is running under.

pub mod appveyor;
pub mod cached;
pub mod circle_ci;
pub mod config;
pub mod repo_provider;
pub mod travis;
pub mod vars;

use std::sync::Arc;

use crate::environment::{EnvSource, ProcessEnv, ProviderDetector, ProviderKind};
use crate::shell::{CommandRunner, SystemRunner};

pub use appveyor::AppVeyor;
pub use cached::Cached;
pub use circle_ci::CircleCi;
pub use config::{CiConfig, ConfigBase, Property};
pub use repo_provider::{AppVeyorRepoProvider, RepoProvider};
pub use travis::{in_travis, in_travis_pr, travis_branch, EventType, Travis};
pub use vars::ProviderVars;

/// The configuration for the detected provider.
#[derive(Debug)]
pub enum ActiveConfig {
    Travis(Travis),
    CircleCi(CircleCi),
    AppVeyor(AppVeyor),
    /// No provider marker was set to `true`.
    Undetermined,
}

impl ActiveConfig {
    /// The configuration as a trait object, if a provider was detected.
    pub fn as_config(&self) -> Option<&dyn CiConfig> {
        match self {
            Self::Travis(config) => Some(config),
            Self::CircleCi(config) => Some(config),
            Self::AppVeyor(config) => Some(config),
            Self::Undetermined => None,
        }
    }

    /// Whether no provider was detected.
    pub fn is_undetermined(&self) -> bool {
        matches!(self, Self::Undetermined)
    }
}

/// Build the configuration for the provider the environment marks active.
///
/// Providers are checked Travis first, then CircleCI, then AppVeyor.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ci_diff::ci::{get_config, ActiveConfig};
/// use ci_diff::environment::MapEnv;
/// use ci_diff::shell::MockRunner;
///
/// let env = Arc::new(MapEnv::from_pairs(&[("TRAVIS", "true")]));
/// let config = get_config(env, Arc::new(MockRunner::new()));
/// assert!(matches!(config, ActiveConfig::Travis(_)));
///
/// let config = get_config(Arc::new(MapEnv::new()), Arc::new(MockRunner::new()));
/// assert!(config.is_undetermined());
/// ```
pub fn get_config(env: Arc<dyn EnvSource>, runner: Arc<dyn CommandRunner>) -> ActiveConfig {
    let Some(detected) = ProviderDetector::new().detect_with_env(env.as_ref()) else {
        tracing::debug!("no CI provider detected");
        return ActiveConfig::Undetermined;
    };
    tracing::debug!("detected {} via {}", detected.kind, detected.detected_via);

    match detected.kind {
        ProviderKind::Travis => ActiveConfig::Travis(Travis::new(env, runner)),
        ProviderKind::CircleCi => ActiveConfig::CircleCi(CircleCi::new(env, runner)),
        ProviderKind::AppVeyor => ActiveConfig::AppVeyor(AppVeyor::new(env, runner)),
    }
}

/// [`get_config`] over the process environment and system git.
pub fn get_config_from_process() -> ActiveConfig {
    get_config(Arc::new(ProcessEnv), Arc::new(SystemRunner::new()))
}
