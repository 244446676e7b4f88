//! Decides which repositories become project cards.

use crate::github::RepositoryMetadata;
use crate::store::ProcessedSet;
use std::fmt;

/// Why a repository was not turned into a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// An output file for the repository already exists.
    AlreadyProcessed,
    /// The repository is archived or private.
    ArchivedOrPrivate,
    /// The repository has neither a homepage nor a description.
    MissingMetadata,
}

impl SkipReason {
    /// Returns a short human-readable explanation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyProcessed => "already exists",
            Self::ArchivedOrPrivate => "archived or private",
            Self::MissingMetadata => "no homepage or description",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluates the filter rules in precedence order.
///
/// # Errors
///
/// Returns the first [`SkipReason`] that applies.
pub fn evaluate(repo: &RepositoryMetadata, processed: &ProcessedSet) -> Result<(), SkipReason> {
    if processed.contains(&repo.name) {
        return Err(SkipReason::AlreadyProcessed);
    }
    if repo.archived || repo.private {
        return Err(SkipReason::ArchivedOrPrivate);
    }
    if repo.homepage.is_none() && repo.description.is_none() {
        return Err(SkipReason::MissingMetadata);
    }
    Ok(())
}

/// Returns true if the repository should be turned into a project card.
#[must_use]
pub fn should_process(repo: &RepositoryMetadata, processed: &ProcessedSet) -> bool {
    evaluate(repo, processed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str) -> RepositoryMetadata {
        RepositoryMetadata {
            owner: "octo".to_string(),
            name: name.to_string(),
            description: Some("Something useful".to_string()),
            homepage: Some("https://x.io".to_string()),
            language: Some("Rust".to_string()),
            topics: Vec::new(),
            archived: false,
            private: false,
            created_at: Utc.with_ymd_and_hms(2023, 5, 4, 0, 0, 0).unwrap(),
            has_pages: false,
        }
    }

    #[test]
    fn accepts_public_repository_with_metadata() {
        assert!(should_process(&repo("widget"), &ProcessedSet::default()));
    }

    #[test]
    fn rejects_already_processed_regardless_of_fields() {
        let processed: ProcessedSet = ["widget".to_string()].into_iter().collect();

        let mut candidate = repo("widget");
        assert_eq!(evaluate(&candidate, &processed), Err(SkipReason::AlreadyProcessed));

        candidate.archived = true;
        candidate.homepage = None;
        candidate.description = None;
        assert_eq!(evaluate(&candidate, &processed), Err(SkipReason::AlreadyProcessed));
    }

    #[test]
    fn rejects_archived_or_private_even_with_metadata() {
        let processed = ProcessedSet::default();

        let mut archived = repo("old");
        archived.archived = true;
        assert_eq!(evaluate(&archived, &processed), Err(SkipReason::ArchivedOrPrivate));

        let mut private = repo("secret");
        private.private = true;
        assert_eq!(evaluate(&private, &processed), Err(SkipReason::ArchivedOrPrivate));
    }

    #[test]
    fn rejects_without_homepage_and_description() {
        let mut bare = repo("bare");
        bare.homepage = None;
        bare.description = None;
        assert_eq!(
            evaluate(&bare, &ProcessedSet::default()),
            Err(SkipReason::MissingMetadata)
        );
    }

    #[test]
    fn either_homepage_or_description_is_enough() {
        let processed = ProcessedSet::default();

        let mut homepage_only = repo("site");
        homepage_only.description = None;
        assert!(should_process(&homepage_only, &processed));

        let mut description_only = repo("lib");
        description_only.homepage = None;
        assert!(should_process(&description_only, &processed));
    }

    #[test]
    fn skip_reasons_render_for_logs() {
        assert_eq!(SkipReason::AlreadyProcessed.to_string(), "already exists");
        assert_eq!(SkipReason::ArchivedOrPrivate.to_string(), "archived or private");
        assert_eq!(SkipReason::MissingMetadata.to_string(), "no homepage or description");
    }
}
