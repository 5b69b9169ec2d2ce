//! Library integration tests.

use std::sync::Arc;

use ci_diff::ci::{
    get_config, ActiveConfig, AppVeyorRepoProvider, CiConfig, CircleCi, EventType, RepoProvider,
    Travis,
};
use ci_diff::environment::{is_env_flag_true, MapEnv};
use ci_diff::shell::MockRunner;
use ci_diff::CiError;

fn travis(pairs: &[(&str, &str)]) -> (Travis, Arc<MapEnv>, Arc<MockRunner>) {
    let env = Arc::new(MapEnv::from_pairs(pairs));
    let runner = Arc::new(MockRunner::new());
    (Travis::new(env.clone(), runner.clone()), env, runner)
}

#[test]
fn error_types_are_public() {
    let err = CiError::MissingEnvVar {
        var: "TRAVIS_BRANCH".into(),
        what: "an associated branch".into(),
    };
    assert!(err.to_string().contains("TRAVIS_BRANCH"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ci_diff::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn env_flag_is_exact() {
    let env = MapEnv::from_pairs(&[
        ("A", "true"),
        ("B", "True"),
        ("C", "1"),
        ("D", "yes"),
        ("E", ""),
    ]);
    assert!(is_env_flag_true(&env, "A"));
    for name in ["B", "C", "D", "E", "UNSET"] {
        assert!(!is_env_flag_true(&env, name), "{name}");
    }
}

#[test]
fn push_build_base_end_to_end() {
    let (config, _, runner) = travis(&[
        ("TRAVIS_EVENT_TYPE", "push"),
        ("TRAVIS_COMMIT_RANGE", "a..b"),
    ]);
    runner.respond(&["git", "rev-parse", "a"], "abcd");
    runner.respond(&["git", "merge-base", "abcd", "b"], "abcd");

    assert_eq!(config.base().unwrap(), "abcd");
    assert_eq!(config.diff_base().unwrap(), "abcd");
    assert!(!config.in_pull_request().unwrap());
    assert_eq!(runner.total_calls(), 2);
}

#[test]
fn pull_request_base_end_to_end() {
    let (config, _, runner) = travis(&[
        ("TRAVIS_EVENT_TYPE", "pull_request"),
        ("TRAVIS_BRANCH", "master"),
    ]);
    assert_eq!(config.base().unwrap(), "master");
    assert!(config.in_pull_request().unwrap());
    assert_eq!(config.event_type().unwrap(), EventType::PullRequest);
    assert_eq!(runner.total_calls(), 0);
}

#[test]
fn push_base_with_unresolvable_start() {
    let (config, _, runner) = travis(&[
        ("TRAVIS_EVENT_TYPE", "push"),
        ("TRAVIS_COMMIT_RANGE", "gone..b"),
    ]);
    runner.fail(&["git", "rev-parse", "gone"], 128);
    assert!(matches!(config.base(), Err(CiError::Unsupported { .. })));
}

#[test]
fn push_base_with_rewritten_history() {
    let (config, _, runner) = travis(&[
        ("TRAVIS_EVENT_TYPE", "push"),
        ("TRAVIS_COMMIT_RANGE", "a..b"),
    ]);
    runner.respond(&["git", "rev-parse", "a"], "abcd");
    runner.respond(&["git", "merge-base", "abcd", "b"], "9999");
    assert!(matches!(config.base(), Err(CiError::Indeterminate { .. })));
}

#[test]
fn memoized_properties_query_once() {
    let (config, env, runner) = travis(&[
        ("TRAVIS_PULL_REQUEST", "1234"),
        ("TRAVIS_BRANCH", "master"),
        ("TRAVIS_TAG", "v1"),
    ]);
    runner.respond(&["git", "log", "--pretty=%P", "-1", "HEAD"], "a b");

    for _ in 0..3 {
        assert_eq!(config.pull_request(), Some(1234));
        assert_eq!(config.branch().unwrap(), "master");
        assert_eq!(config.tag(), Some("v1"));
        assert!(config.is_merge().unwrap());
    }
    assert_eq!(env.lookup_count("TRAVIS_PULL_REQUEST"), 1);
    assert_eq!(env.lookup_count("TRAVIS_BRANCH"), 1);
    assert_eq!(env.lookup_count("TRAVIS_TAG"), 1);
    assert_eq!(runner.total_calls(), 1);
}

#[test]
fn pull_request_parsing_never_fails() {
    let (config, _, _) = travis(&[("TRAVIS_PULL_REQUEST", "not-a-number")]);
    assert_eq!(config.pull_request(), None);
    let (config, _, _) = travis(&[]);
    assert_eq!(config.pull_request(), None);
}

#[test]
fn repo_provider_classification() {
    assert_eq!(
        RepoProvider::from_url("https://github.com/org/repo").unwrap(),
        RepoProvider::GitHub
    );
    assert_eq!(
        RepoProvider::from_url("https://bitbucket.org/user/repo").unwrap(),
        RepoProvider::Bitbucket
    );
    assert!(RepoProvider::from_url("git://github.com/org/repo").is_err());
    assert!(RepoProvider::from_url("https://gitlab.com/org/repo").is_err());
}

#[test]
fn circle_ci_repository_provider() {
    let env = MapEnv::from_pairs(&[
        ("CIRCLECI", "true"),
        ("CIRCLE_REPOSITORY_URL", "https://github.com/org/repo"),
    ]);
    let config = CircleCi::new(Arc::new(env), Arc::new(MockRunner::new()));
    assert_eq!(config.repository_provider().unwrap(), RepoProvider::GitHub);
}

#[test]
fn selector_returns_undetermined() {
    let config = get_config(Arc::new(MapEnv::new()), Arc::new(MockRunner::new()));
    assert!(matches!(config, ActiveConfig::Undetermined));
}

#[test]
fn selector_builds_appveyor() {
    let env = MapEnv::from_pairs(&[("APPVEYOR", "true"), ("APPVEYOR_REPO_PROVIDER", "vso")]);
    match get_config(Arc::new(env), Arc::new(MockRunner::new())) {
        ActiveConfig::AppVeyor(config) => {
            assert_eq!(
                config.repository_provider().unwrap(),
                AppVeyorRepoProvider::Vso
            );
        }
        other => panic!("expected AppVeyor, got {other:?}"),
    }
}

#[test]
fn cli_types_are_public() {
    use ci_diff::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["ci-diff", "show", "--json"]);
    if let Some(Commands::Show(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Show command");
    }
}
