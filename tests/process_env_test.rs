//! Helpers that read the real process environment.
//!
//! This file holds a single test so that nothing else in the same process
//! reads the variables while they are being changed.

use ci_diff::ci::{get_config_from_process, in_travis, in_travis_pr, travis_branch, ActiveConfig};
use ci_diff::CiError;

const PROVIDER_VARS: &[&str] = &[
    "TRAVIS",
    "TRAVIS_EVENT_TYPE",
    "TRAVIS_BRANCH",
    "TRAVIS_PULL_REQUEST",
    "CIRCLECI",
    "APPVEYOR",
];

fn clear_provider_vars() {
    for name in PROVIDER_VARS {
        std::env::remove_var(name);
    }
}

#[test]
fn process_helpers_follow_the_environment() {
    clear_provider_vars();
    assert!(!in_travis());
    assert!(matches!(
        in_travis_pr(),
        Err(CiError::MissingEnvVar { .. })
    ));
    assert!(matches!(
        travis_branch(),
        Err(CiError::MissingEnvVar { .. })
    ));
    assert!(get_config_from_process().is_undetermined());

    std::env::set_var("TRAVIS", "true");
    std::env::set_var("TRAVIS_EVENT_TYPE", "pull_request");
    std::env::set_var("TRAVIS_BRANCH", "master");
    std::env::set_var("TRAVIS_PULL_REQUEST", "5");

    assert!(in_travis());
    assert!(in_travis_pr().unwrap());
    assert_eq!(travis_branch().unwrap(), "master");
    match get_config_from_process() {
        ActiveConfig::Travis(config) => {
            assert_eq!(config.pull_request(), Some(5));
            assert_eq!(config.base().unwrap(), "master");
        }
        other => panic!("expected Travis, got {other:?}"),
    }

    std::env::set_var("TRAVIS_EVENT_TYPE", "push");
    assert!(!in_travis_pr().unwrap());

    clear_provider_vars();
    std::env::set_var("CIRCLECI", "true");
    assert!(!in_travis());
    assert!(matches!(get_config_from_process(), ActiveConfig::CircleCi(_)));

    clear_provider_vars();
}
