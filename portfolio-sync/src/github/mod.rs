//! Read access to the GitHub REST API.
//!
//! The pipeline only talks to GitHub through [`RepositoryApi`], so the
//! orchestrator can be driven by an in-memory implementation in tests.

mod client;
mod error;
mod repository;

pub use client::OctocrabClient;
pub use error::GitHubError;
pub use repository::RepositoryMetadata;

use async_trait::async_trait;

/// Read-only operations the sync pipeline needs from the hosting API.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Fetches metadata for one repository of the configured owner.
    async fn get_repository(&self, name: &str) -> Result<RepositoryMetadata, GitHubError>;

    /// Fetches the decoded README, or `None` when the repository has none.
    async fn get_readme(&self, name: &str) -> Result<Option<String>, GitHubError>;

    /// Lists the names of the files at the repository root.
    async fn list_root_files(&self, name: &str) -> Result<Vec<String>, GitHubError>;

    /// Lists up to `per_page` of the owner's repositories, newest first.
    async fn list_repositories(
        &self,
        per_page: u8,
    ) -> Result<Vec<RepositoryMetadata>, GitHubError>;
}
