//! CI provider detection.
//!
//! Checks each supported provider's marker variable in a fixed order and
//! reports the first one set to exactly `true`.

use std::fmt;

use serde::Serialize;

use crate::ci::vars::{IN_APPVEYOR, IN_CIRCLE_CI, IN_TRAVIS};

use super::source::{is_env_flag_true, EnvSource};

/// A supported CI provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Travis,
    CircleCi,
    AppVeyor,
}

impl ProviderKind {
    /// Detection order. Earlier providers win when several markers are set.
    pub const ORDER: [ProviderKind; 3] = [
        ProviderKind::Travis,
        ProviderKind::CircleCi,
        ProviderKind::AppVeyor,
    ];

    /// The environment variable whose value `true` marks this provider.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Travis => IN_TRAVIS,
            Self::CircleCi => IN_CIRCLE_CI,
            Self::AppVeyor => IN_APPVEYOR,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Travis => "Travis",
            Self::CircleCi => "CircleCI",
            Self::AppVeyor => "AppVeyor",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A provider found by detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedProvider {
    /// Which provider.
    pub kind: ProviderKind,
    /// The marker variable that triggered detection.
    pub detected_via: &'static str,
}

/// Detects the CI provider a build is running under.
///
/// # Example
///
/// ```
/// use ci_diff::environment::{MapEnv, ProviderDetector, ProviderKind};
///
/// let env = MapEnv::from_pairs(&[("CIRCLECI", "true")]);
/// let detected = ProviderDetector::new().detect_with_env(&env).unwrap();
/// assert_eq!(detected.kind, ProviderKind::CircleCi);
/// assert_eq!(detected.detected_via, "CIRCLECI");
/// ```
#[derive(Debug, Default)]
pub struct ProviderDetector;

impl ProviderDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect with a custom environment (for testing).
    ///
    /// Every marker is checked so that ambiguous environments can be
    /// reported; the first match in [`ProviderKind::ORDER`] is returned.
    pub fn detect_with_env(&self, env: &dyn EnvSource) -> Option<DetectedProvider> {
        let matching: Vec<ProviderKind> = ProviderKind::ORDER
            .into_iter()
            .filter(|kind| is_env_flag_true(env, kind.marker()))
            .collect();

        if matching.len() > 1 {
            let names: Vec<&str> = matching.iter().map(|k| k.name()).collect();
            tracing::warn!(
                "Multiple CI providers detected: {}. Using {}.",
                names.join(", "),
                names[0],
            );
        }

        matching.first().map(|kind| DetectedProvider {
            kind: *kind,
            detected_via: kind.marker(),
        })
    }
}
