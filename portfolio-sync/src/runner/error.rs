//! Runner error types.

/// Errors that can occur while running a sync.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No GitHub token was supplied.
    #[error("GitHub token is missing; set GITHUB_TOKEN")]
    MissingCredential,

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// GitHub API read errors.
    #[error(transparent)]
    GitHub(#[from] crate::github::GitHubError),

    /// Output directory errors.
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),

    /// Document rendering errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
