//! Project store error types.

use thiserror::Error;

/// Errors that can occur while reading or writing project files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("Failed to access '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Repository name can't be used as a file name.
    #[error("Invalid repository name for output file: '{name}'")]
    InvalidName { name: String },

    /// The source-line pattern for the owner could not be compiled.
    #[error("Invalid source-line pattern: {0}")]
    Pattern(#[from] regex::Error),
}
