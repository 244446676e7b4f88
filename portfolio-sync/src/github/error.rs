//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur while reading from the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Fetching a single repository's metadata failed.
    #[error("Failed to fetch repository '{repo}': {source}")]
    RepositoryFetch {
        repo: String,
        #[source]
        source: octocrab::Error,
    },

    /// Listing a repository's top-level contents failed.
    #[error("Failed to list contents of '{repo}': {source}")]
    ContentListing {
        repo: String,
        #[source]
        source: octocrab::Error,
    },

    /// Listing the account's repositories failed.
    #[error("Failed to list repositories for '{owner}': {source}")]
    RepositoryList {
        owner: String,
        #[source]
        source: octocrab::Error,
    },

    /// The API refused the request because of rate limiting, or the network failed.
    #[error("Rate limited or network failure: {0}")]
    RateLimitOrNetwork(#[source] octocrab::Error),

    /// The API response lacked a field the pipeline needs.
    #[error("Repository '{repo}' is missing required field '{field}'")]
    MissingField { repo: String, field: &'static str },
}

impl GitHubError {
    /// Wraps an octocrab error, preferring [`GitHubError::RateLimitOrNetwork`]
    /// when the failure is not specific to the request.
    pub(crate) fn classify(
        source: octocrab::Error,
        specific: impl FnOnce(octocrab::Error) -> Self,
    ) -> Self {
        if is_rate_limit_or_network(&source) {
            Self::RateLimitOrNetwork(source)
        } else {
            specific(source)
        }
    }
}

/// Checks if an error indicates rate limiting or a transport failure.
fn is_rate_limit_or_network(error: &octocrab::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("rate limit")
        || msg.contains("429")
        || msg.contains("timed out")
        || msg.contains("connect")
        || msg.contains("dns")
}
