//! Environment variable access.
//!
//! All configuration reads go through [`EnvSource`] so tests can supply a
//! fixed environment instead of mutating the process environment.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::{CiError, Result};

/// A readable set of environment variables.
pub trait EnvSource: Send + Sync {
    /// Look up a single variable.
    ///
    /// A variable that is set to a value that is not valid unicode reads as
    /// unset, so a required one reports [`CiError::MissingEnvVar`].
    fn var(&self, name: &str) -> Option<String>;

    /// Snapshot of every variable, sorted by name.
    fn vars(&self) -> BTreeMap<String, String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn vars(&self) -> BTreeMap<String, String> {
        // Variables that are not valid unicode are skipped.
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// A fixed environment that records every lookup.
///
/// # Example
///
/// ```
/// use ci_diff::environment::{is_env_flag_true, MapEnv};
///
/// let env = MapEnv::from_pairs(&[("TRAVIS", "true")]);
/// assert!(is_env_flag_true(&env, "TRAVIS"));
/// assert_eq!(env.lookup_count("TRAVIS"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
    lookups: Mutex<Vec<String>>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment from name/value pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Add or replace a variable.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Number of times `name` was looked up.
    pub fn lookup_count(&self, name: &str) -> usize {
        self.lookups
            .lock()
            .map(|l| l.iter().filter(|n| *n == name).count())
            .unwrap_or(0)
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(name.to_string());
        }
        self.vars.get(name).cloned()
    }

    fn vars(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }
}

/// Read a required variable.
///
/// `what` describes the value for the error message, e.g. "an associated
/// branch".
pub fn read_env(env: &dyn EnvSource, name: &str, what: &str) -> Result<String> {
    env.var(name).ok_or_else(|| CiError::MissingEnvVar {
        var: name.to_string(),
        what: what.to_string(),
    })
}

/// True iff `name` is set to exactly `"true"`.
pub fn is_env_flag_true(env: &dyn EnvSource, name: &str) -> bool {
    env.var(name).as_deref() == Some("true")
}

/// Parse `name` as an integer; unset or unparsable values are `None`.
pub fn parse_optional_int(env: &dyn EnvSource, name: &str) -> Option<u64> {
    env.var(name).and_then(|value| value.parse().ok())
}

/// Read an optional variable, treating the empty string as unset.
pub fn read_optional(env: &dyn EnvSource, name: &str) -> Option<String> {
    env.var(name).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_true_only_for_exact_true() {
        for value in ["True", "TRUE", "1", "yes", "", "false", " true"] {
            let env = MapEnv::from_pairs(&[("MY_CI", value)]);
            assert!(!is_env_flag_true(&env, "MY_CI"), "value {value:?}");
        }
        let env = MapEnv::from_pairs(&[("MY_CI", "true")]);
        assert!(is_env_flag_true(&env, "MY_CI"));
    }

    #[test]
    fn flag_false_when_unset() {
        assert!(!is_env_flag_true(&MapEnv::new(), "MY_CI"));
    }

    #[test]
    fn read_env_returns_value() {
        let env = MapEnv::from_pairs(&[("MY_BRANCH", "this-very-branch")]);
        assert_eq!(
            read_env(&env, "MY_BRANCH", "a branch").unwrap(),
            "this-very-branch"
        );
    }

    #[test]
    fn read_env_fails_when_unset() {
        let err = read_env(&MapEnv::new(), "MY_BRANCH", "a branch").unwrap_err();
        match err {
            CiError::MissingEnvVar { var, .. } => assert_eq!(var, "MY_BRANCH"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn optional_int_parses_numbers() {
        let env = MapEnv::from_pairs(&[("PR", "1234")]);
        assert_eq!(parse_optional_int(&env, "PR"), Some(1234));
    }

    #[test]
    fn optional_int_absent_for_bad_or_missing_values() {
        for value in ["not-a-number", "false", "", "-3", "12a"] {
            let env = MapEnv::from_pairs(&[("PR", value)]);
            assert_eq!(parse_optional_int(&env, "PR"), None, "value {value:?}");
        }
        assert_eq!(parse_optional_int(&MapEnv::new(), "PR"), None);
    }

    #[test]
    fn optional_treats_empty_as_unset() {
        let env = MapEnv::from_pairs(&[("TAG", ""), ("OTHER", "v1.0")]);
        assert_eq!(read_optional(&env, "TAG"), None);
        assert_eq!(read_optional(&env, "OTHER").as_deref(), Some("v1.0"));
        assert_eq!(read_optional(&env, "MISSING"), None);
    }

    #[cfg(unix)]
    #[test]
    fn process_env_treats_non_unicode_as_unset() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "CI_DIFF_SOURCE_TEST_NON_UNICODE";
        std::env::set_var(name, OsStr::from_bytes(b"br\xffnch"));
        assert_eq!(ProcessEnv.var(name), None);
        assert!(!ProcessEnv.vars().contains_key(name));
        assert!(matches!(
            read_env(&ProcessEnv, name, "a branch"),
            Err(CiError::MissingEnvVar { .. })
        ));
        std::env::remove_var(name);
    }

    #[test]
    fn map_env_counts_lookups() {
        let env = MapEnv::new().with("A", "1");
        env.var("A");
        env.var("A");
        env.var("B");
        assert_eq!(env.lookup_count("A"), 2);
        assert_eq!(env.lookup_count("B"), 1);
        assert_eq!(env.vars().len(), 1);
    }
}
