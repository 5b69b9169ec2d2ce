//! Code hosting provider identification.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CiError, Result};

const GITHUB_HOST: &str = "github.com";
const GITHUB_PREFIX: &str = "https://github.com/";
const BITBUCKET_HOST: &str = "bitbucket.org";
const BITBUCKET_PREFIX: &str = "https://bitbucket.org/";

/// Hosting provider of a repository URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoProvider {
    GitHub,
    Bitbucket,
}

impl RepoProvider {
    /// Every provider, in classification order.
    pub const ALL: [RepoProvider; 2] = [RepoProvider::GitHub, RepoProvider::Bitbucket];

    /// Lowercase provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Bitbucket => "bitbucket",
        }
    }

    fn host(&self) -> &'static str {
        match self {
            Self::GitHub => GITHUB_HOST,
            Self::Bitbucket => BITBUCKET_HOST,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Self::GitHub => GITHUB_PREFIX,
            Self::Bitbucket => BITBUCKET_PREFIX,
        }
    }

    /// Classify a repository URL by its host.
    ///
    /// The first known host found in the URL decides the provider, and the
    /// URL must then start with `https://<host>/`.
    ///
    /// # Example
    ///
    /// ```
    /// use ci_diff::ci::RepoProvider;
    ///
    /// let provider = RepoProvider::from_url("https://github.com/org/repo").unwrap();
    /// assert_eq!(provider, RepoProvider::GitHub);
    /// assert!(RepoProvider::from_url("https://gitlab.com/org/repo").is_err());
    /// ```
    pub fn from_url(url: &str) -> Result<Self> {
        let provider = Self::ALL
            .into_iter()
            .find(|p| url.contains(p.host()))
            .ok_or_else(|| CiError::UnknownRepoHost {
                url: url.to_string(),
                valid: valid_names(&Self::ALL.map(|p| p.as_str())),
            })?;

        if url.starts_with(provider.prefix()) {
            Ok(provider)
        } else {
            Err(CiError::UnexpectedRepoPrefix {
                url: url.to_string(),
                host: provider.host().to_string(),
                expected_prefix: provider.prefix().to_string(),
            })
        }
    }
}

impl fmt::Display for RepoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository providers AppVeyor reports for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppVeyorRepoProvider {
    GitHub,
    Bitbucket,
    Kiln,
    Vso,
    GitLab,
}

impl AppVeyorRepoProvider {
    /// Every provider AppVeyor may report.
    pub const ALL: [AppVeyorRepoProvider; 5] = [
        AppVeyorRepoProvider::GitHub,
        AppVeyorRepoProvider::Bitbucket,
        AppVeyorRepoProvider::Kiln,
        AppVeyorRepoProvider::Vso,
        AppVeyorRepoProvider::GitLab,
    ];

    /// Provider name as AppVeyor spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Bitbucket => "bitbucket",
            Self::Kiln => "kiln",
            Self::Vso => "vso",
            Self::GitLab => "gitlab",
        }
    }
}

impl FromStr for AppVeyorRepoProvider {
    type Err = CiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CiError::InvalidRepoProvider {
                value: s.to_string(),
                valid: valid_names(&Self::ALL.map(|p| p.as_str())),
            })
    }
}

impl fmt::Display for AppVeyorRepoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn valid_names(names: &[&str]) -> String {
    names.join(", ")
}
