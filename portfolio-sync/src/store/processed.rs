//! Set of repositories already represented in the output directory.

use regex::Regex;
use std::collections::HashSet;

/// Names of repositories that already have a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedSet {
    names: HashSet<String>,
}

impl ProcessedSet {
    /// Returns true if `name` already has a project card.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Adds a repository name.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Number of known repositories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no repositories are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for ProcessedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Matches the `Source:` line written for `owner` and captures the repository name.
pub(crate) fn source_line_pattern(owner: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?m)^Source:.*github\.com/{}/([^)\s/]+)",
        regex::escape(owner)
    ))
}

/// Extracts the repository name from a project card's `Source:` line.
///
/// The card's own line is the last one; earlier matches come from a pasted README.
pub(crate) fn source_repository(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures_iter(content)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
