//! Repository metadata as consumed by the pipeline.

use crate::github::GitHubError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata for one repository, normalized from the API model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryMetadata {
    /// Account that owns the repository.
    pub owner: String,

    /// Repository name; also the output file stem.
    pub name: String,

    /// Short description from the "About" box.
    pub description: Option<String>,

    /// Homepage URL from the "About" box.
    pub homepage: Option<String>,

    /// Primary language as reported by GitHub.
    pub language: Option<String>,

    /// Repository topics.
    pub topics: Vec<String>,

    /// Whether the repository is archived.
    pub archived: bool,

    /// Whether the repository is private.
    pub private: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Whether GitHub Pages is enabled.
    pub has_pages: bool,
}

impl RepositoryMetadata {
    /// Converts an octocrab repository model.
    ///
    /// Empty descriptions and homepages are treated as absent, since the API
    /// reports unset values as `""`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::MissingField`] when the creation date is absent.
    pub fn from_octocrab(
        owner: &str,
        repo: octocrab::models::Repository,
    ) -> Result<Self, GitHubError> {
        let created_at = repo.created_at.ok_or_else(|| GitHubError::MissingField {
            repo: repo.name.clone(),
            field: "created_at",
        })?;

        let language = repo
            .language
            .as_ref()
            .and_then(|value| value.as_str())
            .and_then(non_blank);

        Ok(Self {
            owner: owner.to_string(),
            description: repo.description.as_deref().and_then(non_blank),
            homepage: repo.homepage.as_deref().and_then(non_blank),
            language,
            topics: repo.topics.unwrap_or_default(),
            archived: repo.archived.unwrap_or(false),
            private: repo.private.unwrap_or(false),
            created_at,
            has_pages: repo.has_pages.unwrap_or(false),
            name: repo.name,
        })
    }

    /// Canonical web page of the repository.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_filters_empty_values() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
    }

    #[test]
    fn non_blank_keeps_values_verbatim() {
        assert_eq!(non_blank("https://x.io/"), Some("https://x.io/".to_string()));
        assert_eq!(non_blank(" https://x.io "), Some(" https://x.io ".to_string()));
    }

    #[test]
    fn html_url_uses_owner_and_name() {
        let repo = RepositoryMetadata {
            owner: "octo".to_string(),
            name: "my-cool-project".to_string(),
            description: None,
            homepage: None,
            language: None,
            topics: Vec::new(),
            archived: false,
            private: false,
            created_at: DateTime::<Utc>::default(),
            has_pages: false,
        };

        assert_eq!(repo.html_url(), "https://github.com/octo/my-cool-project");
    }
}
