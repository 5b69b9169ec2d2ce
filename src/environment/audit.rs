//! Audit of provider environment variables.
//!
//! Records what a build's CI variables looked like and flags any relevant
//! variable a provider configuration does not know about, so a provider
//! renaming or adding variables shows up as a failing build.

use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{CiError, Result};

use super::source::EnvSource;

const TRAVIS_EXPECTED: &[&str] = &[
    "TRAVIS",
    "TRAVIS_BRANCH",
    "TRAVIS_BUILD_DIR",
    "TRAVIS_BUILD_ID",
    "TRAVIS_BUILD_NUMBER",
    "TRAVIS_COMMIT",
    "TRAVIS_COMMIT_RANGE",
    "TRAVIS_EVENT_TYPE",
    "TRAVIS_JOB_ID",
    "TRAVIS_JOB_NUMBER",
    "TRAVIS_LANGUAGE",
    "TRAVIS_OS_NAME",
    "TRAVIS_PULL_REQUEST",
    "TRAVIS_PYTHON_VERSION",
    "TRAVIS_REPO_SLUG",
    "TRAVIS_SECURE_ENV_VARS",
    "TRAVIS_TAG",
];

const CIRCLE_CI_EXPECTED: &[&str] = &[
    "CI",
    "CIRCLECI",
    "CIRCLECI_PKG_DIR",
    "CIRCLE_ARTIFACTS",
    "CIRCLE_BRANCH",
    "CIRCLE_BUILD_IMAGE",
    "CIRCLE_BUILD_NUM",
    "CIRCLE_BUILD_URL",
    "CIRCLE_COMPARE_URL",
    "CIRCLE_NODE_INDEX",
    "CIRCLE_NODE_TOTAL",
    "CIRCLE_PREVIOUS_BUILD_NUM",
    "CIRCLE_PROJECT_REPONAME",
    "CIRCLE_PROJECT_USERNAME",
    "CIRCLE_PR_NUMBER",
    "CIRCLE_PR_REPONAME",
    "CIRCLE_PR_USERNAME",
    "CIRCLE_REPOSITORY_URL",
    "CIRCLE_SHA1",
    "CIRCLE_TEST_REPORTS",
    "CIRCLE_USERNAME",
    "CI_PULL_REQUEST",
    "CI_PULL_REQUESTS",
    "CI_REPORTS",
];

/// Provider whose variables are audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuditTarget {
    Travis,
    #[value(name = "circleci")]
    CircleCi,
}

impl AuditTarget {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Travis => "travis",
            Self::CircleCi => "circle",
        }
    }

    /// Every variable the provider is known to set.
    pub fn expected(&self) -> &'static [&'static str] {
        match self {
            Self::Travis => TRAVIS_EXPECTED,
            Self::CircleCi => CIRCLE_CI_EXPECTED,
        }
    }

    /// Whether a variable name is relevant to this provider.
    ///
    /// The provider keyword matches case-insensitively; `CI` must match
    /// exactly.
    pub fn is_relevant(&self, name: &str) -> bool {
        name.to_lowercase().contains(self.keyword()) || name.contains("CI")
    }
}

/// Outcome of an environment audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    /// Every relevant variable and its value.
    pub relevant: BTreeMap<String, String>,
    /// Relevant variables outside the expected set, sorted.
    pub unexpected: Vec<String>,
}

impl AuditReport {
    /// True when no unexpected variables were found.
    pub fn is_clean(&self) -> bool {
        self.unexpected.is_empty()
    }

    /// The relevant variables as sorted, indented JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.relevant).map_err(|e| CiError::Other(e.into()))
    }
}

/// Collect the variables relevant to `target` and compare them with the
/// provider's expected set.
///
/// # Example
///
/// ```
/// use ci_diff::environment::{audit_env, AuditTarget, MapEnv};
///
/// let env = MapEnv::from_pairs(&[("TRAVIS", "true"), ("TRAVIS_NEW_THING", "1")]);
/// let report = audit_env(&env, AuditTarget::Travis);
/// assert_eq!(report.unexpected, vec!["TRAVIS_NEW_THING".to_string()]);
/// ```
pub fn audit_env(env: &dyn EnvSource, target: AuditTarget) -> AuditReport {
    let relevant: BTreeMap<String, String> = env
        .vars()
        .into_iter()
        .filter(|(name, _)| target.is_relevant(name))
        .collect();

    let expected: BTreeSet<&str> = target.expected().iter().copied().collect();
    let unexpected = relevant
        .keys()
        .filter(|name| !expected.contains(name.as_str()))
        .cloned()
        .collect();

    AuditReport {
        relevant,
        unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MapEnv;

    #[test]
    fn travis_filter() {
        let target = AuditTarget::Travis;
        assert!(target.is_relevant("TRAVIS_BRANCH"));
        assert!(target.is_relevant("my_travis_token"));
        assert!(target.is_relevant("CI"));
        assert!(target.is_relevant("CONTINUOUS_INTEGRATION"));
        assert!(!target.is_relevant("CIRCLE_BRANCH"));
        assert!(!target.is_relevant("ci_lowercase"));
        assert!(!target.is_relevant("HOME"));
    }

    #[test]
    fn circle_filter() {
        let target = AuditTarget::CircleCi;
        assert!(target.is_relevant("CIRCLE_SHA1"));
        assert!(target.is_relevant("CIRCLECI"));
        assert!(target.is_relevant("Circle_Lower"));
        assert!(!target.is_relevant("TRAVIS"));
    }

    #[test]
    fn clean_travis_environment() {
        let env = MapEnv::from_pairs(&[
            ("TRAVIS", "true"),
            ("TRAVIS_BRANCH", "master"),
            ("PATH", "/usr/bin"),
        ]);
        let report = audit_env(&env, AuditTarget::Travis);
        assert!(report.is_clean());
        assert_eq!(report.relevant.len(), 2);
        assert!(!report.relevant.contains_key("PATH"));
    }

    #[test]
    fn generic_ci_is_unexpected_for_travis() {
        let env = MapEnv::from_pairs(&[("TRAVIS", "true"), ("CI", "true")]);
        let report = audit_env(&env, AuditTarget::Travis);
        assert_eq!(report.unexpected, vec!["CI".to_string()]);
    }

    #[test]
    fn generic_ci_is_expected_for_circle() {
        let env = MapEnv::from_pairs(&[("CIRCLECI", "true"), ("CI", "true")]);
        let report = audit_env(&env, AuditTarget::CircleCi);
        assert!(report.is_clean());
    }

    #[test]
    fn unexpected_variables_are_sorted() {
        let env = MapEnv::from_pairs(&[
            ("CIRCLE_ZETA", "1"),
            ("CIRCLE_ALPHA", "1"),
            ("CIRCLE_BRANCH", "master"),
        ]);
        let report = audit_env(&env, AuditTarget::CircleCi);
        assert_eq!(report.unexpected, vec!["CIRCLE_ALPHA", "CIRCLE_ZETA"]);
    }

    #[test]
    fn json_is_sorted_and_indented() {
        let env = MapEnv::from_pairs(&[("TRAVIS_TAG", "v1"), ("TRAVIS", "true")]);
        let json = audit_env(&env, AuditTarget::Travis).to_json().unwrap();
        assert_eq!(json, "{\n  \"TRAVIS\": \"true\",\n  \"TRAVIS_TAG\": \"v1\"\n}");
    }

    #[test]
    fn value_names() {
        assert_eq!(
            AuditTarget::from_str("circleci", false).unwrap(),
            AuditTarget::CircleCi
        );
        assert_eq!(
            AuditTarget::from_str("travis", false).unwrap(),
            AuditTarget::Travis
        );
    }
}
