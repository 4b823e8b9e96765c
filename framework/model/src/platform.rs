use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::story::ALL_TAG;

/// The platforms a benchmark may run on, as a set of expectation tags.
///
/// An empty set means the benchmark cannot run anywhere. A set containing [ALL_TAG] matches every
/// platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportedPlatforms {
    tags: BTreeSet<String>,
}

impl SupportedPlatforms {
    pub fn all() -> Self {
        Self::only([ALL_TAG])
    }

    pub fn none() -> Self {
        Self {
            tags: BTreeSet::new(),
        }
    }

    pub fn only<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Check these platforms against the expectation tags of a browser.
    ///
    /// Tags compare ASCII case-insensitively.
    pub fn matches<S: AsRef<str>>(&self, expectation_tags: &[S]) -> bool {
        if self.tags.contains(ALL_TAG) {
            return true;
        }

        expectation_tags
            .iter()
            .any(|t| self.tags.contains(&t.as_ref().to_ascii_lowercase()))
    }
}

impl Default for SupportedPlatforms {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_anything() {
        assert!(SupportedPlatforms::all().matches(&["linux"]));
        assert!(SupportedPlatforms::all().matches::<&str>(&[]));
    }

    #[test]
    fn none_matches_nothing() {
        assert!(!SupportedPlatforms::none().matches(&["All"]));
        assert!(!SupportedPlatforms::none().matches(&["linux", "all"]));
        assert!(SupportedPlatforms::none().is_empty());
    }

    #[test]
    fn explicit_platforms_match_any_shared_tag() {
        let platforms = SupportedPlatforms::only(["mac", "Linux"]);

        assert!(platforms.matches(&["win", "linux"]));
        assert!(platforms.matches(&["MAC"]));
        assert!(!platforms.matches(&["win", "android"]));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(SupportedPlatforms::all(), SupportedPlatforms::default());
        assert_eq!(vec!["all"], SupportedPlatforms::default().tags().collect::<Vec<_>>());
    }
}
