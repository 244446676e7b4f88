//! octocrab-backed [`RepositoryApi`] implementation.

use crate::github::{GitHubError, RepositoryApi, RepositoryMetadata};
use async_trait::async_trait;
use octocrab::models::Repository;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, warn};

/// Query parameters for `GET /users/{owner}/repos`.
#[derive(Debug, Serialize)]
struct ListReposQuery<'a> {
    r#type: &'a str,
    sort: &'a str,
    direction: &'a str,
    per_page: u8,
}

/// GitHub client scoped to a single repository owner.
#[derive(Clone)]
pub struct OctocrabClient {
    octocrab: Octocrab,
    owner: String,
}

impl OctocrabClient {
    /// Builds an authenticated client for `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client can't be constructed.
    pub fn new(token: &str, owner: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self::from_octocrab(octocrab, owner))
    }

    /// Wraps an existing octocrab instance.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab, owner: &str) -> Self {
        Self {
            octocrab,
            owner: owner.to_string(),
        }
    }

    /// Returns the owner this client reads from.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[async_trait]
impl RepositoryApi for OctocrabClient {
    async fn get_repository(&self, name: &str) -> Result<RepositoryMetadata, GitHubError> {
        debug!(repo = %name, "Fetching repository metadata");
        let repo = self
            .octocrab
            .repos(&self.owner, name)
            .get()
            .await
            .map_err(|e| {
                GitHubError::classify(e, |source| GitHubError::RepositoryFetch {
                    repo: name.to_string(),
                    source,
                })
            })?;
        RepositoryMetadata::from_octocrab(&self.owner, repo)
    }

    async fn get_readme(&self, name: &str) -> Result<Option<String>, GitHubError> {
        debug!(repo = %name, "Fetching README");
        match self.octocrab.repos(&self.owner, name).get_readme().send().await {
            Ok(content) => {
                let decoded = content.decoded_content();
                if decoded.is_none() {
                    warn!(repo = %name, "README payload could not be decoded");
                }
                Ok(decoded)
            }
            Err(e) => {
                debug!(repo = %name, error = %e, "No README found");
                Ok(None)
            }
        }
    }

    async fn list_root_files(&self, name: &str) -> Result<Vec<String>, GitHubError> {
        debug!(repo = %name, "Listing repository contents");
        let contents = self
            .octocrab
            .repos(&self.owner, name)
            .get_content()
            .send()
            .await
            .map_err(|e| {
                GitHubError::classify(e, |source| GitHubError::ContentListing {
                    repo: name.to_string(),
                    source,
                })
            })?;

        Ok(contents
            .items
            .into_iter()
            .filter(|item| item.r#type == "file")
            .map(|item| item.name)
            .collect())
    }

    async fn list_repositories(
        &self,
        per_page: u8,
    ) -> Result<Vec<RepositoryMetadata>, GitHubError> {
        let route = format!("/users/{}/repos", self.owner);
        let query = ListReposQuery {
            r#type: "owner",
            sort: "created",
            direction: "desc",
            per_page,
        };

        let repos: Vec<Repository> =
            self.octocrab
                .get(route, Some(&query))
                .await
                .map_err(|e| {
                    GitHubError::classify(e, |source| GitHubError::RepositoryList {
                        owner: self.owner.clone(),
                        source,
                    })
                })?;

        let mut metadata = Vec::with_capacity(repos.len());
        for repo in repos {
            let name = repo.name.clone();
            match RepositoryMetadata::from_octocrab(&self.owner, repo) {
                Ok(repo) => metadata.push(repo),
                Err(e) => warn!(repo = %name, error = %e, "Ignoring malformed repository"),
            }
        }
        Ok(metadata)
    }
}
