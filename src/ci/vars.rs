//! Environment variable names consumed from each CI provider.

/// Variables shared by every provider configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderVars {
    /// Set to `true` when running under the provider.
    pub active: &'static str,
    /// Branch being built (or a pull request's target branch).
    pub branch: &'static str,
    /// Tag being built, if any.
    pub tag: &'static str,
}

pub const IN_TRAVIS: &str = "TRAVIS";
pub const TRAVIS_BRANCH: &str = "TRAVIS_BRANCH";
pub const TRAVIS_TAG: &str = "TRAVIS_TAG";
pub const TRAVIS_PR: &str = "TRAVIS_PULL_REQUEST";
pub const TRAVIS_EVENT_TYPE: &str = "TRAVIS_EVENT_TYPE";
pub const TRAVIS_RANGE: &str = "TRAVIS_COMMIT_RANGE";
pub const TRAVIS_SLUG: &str = "TRAVIS_REPO_SLUG";

pub const IN_CIRCLE_CI: &str = "CIRCLECI";
pub const CIRCLE_CI_BRANCH: &str = "CIRCLE_BRANCH";
pub const CIRCLE_CI_TAG: &str = "CIRCLE_TAG";
pub const CIRCLE_CI_PR_NUM: &str = "CIRCLE_PR_NUMBER";
pub const CIRCLE_CI_REPO_URL: &str = "CIRCLE_REPOSITORY_URL";

pub const IN_APPVEYOR: &str = "APPVEYOR";
pub const APPVEYOR_BRANCH: &str = "APPVEYOR_REPO_BRANCH";
pub const APPVEYOR_TAG: &str = "APPVEYOR_REPO_TAG_NAME";
pub const APPVEYOR_PR_NUM: &str = "APPVEYOR_PULL_REQUEST_NUMBER";
pub const APPVEYOR_REPO_PROVIDER: &str = "APPVEYOR_REPO_PROVIDER";

pub const TRAVIS_VARS: ProviderVars = ProviderVars {
    active: IN_TRAVIS,
    branch: TRAVIS_BRANCH,
    tag: TRAVIS_TAG,
};

pub const CIRCLE_CI_VARS: ProviderVars = ProviderVars {
    active: IN_CIRCLE_CI,
    branch: CIRCLE_CI_BRANCH,
    tag: CIRCLE_CI_TAG,
};

pub const APPVEYOR_VARS: ProviderVars = ProviderVars {
    active: IN_APPVEYOR,
    branch: APPVEYOR_BRANCH,
    tag: APPVEYOR_TAG,
};
