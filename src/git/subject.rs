//! Pull request numbers in merge commit subjects.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for `#<digits>` pull request references.
static PR_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("PR_ID_REGEX must compile"));

/// Extract the pull request number from a merge commit subject.
///
/// Returns a number only when exactly one `#<digits>` token appears, as in
/// `Merge pull request #42 from org/branch`.
pub fn pull_request_from_subject(subject: &str) -> Option<u64> {
    let mut matches = PR_ID_REGEX.captures_iter(subject);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    first[1].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_reference() {
        assert_eq!(
            pull_request_from_subject("Merge pull request #42 from org/branch"),
            Some(42)
        );
    }

    #[test]
    fn no_reference() {
        assert_eq!(pull_request_from_subject("Fix typo in README"), None);
    }

    #[test]
    fn multiple_references_are_ambiguous() {
        assert_eq!(pull_request_from_subject("Revert #1 and #2"), None);
    }

    #[test]
    fn hash_without_digits_is_ignored() {
        assert_eq!(pull_request_from_subject("Use # comments (#7)"), Some(7));
    }
}
