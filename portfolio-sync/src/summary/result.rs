//! Processing result types.

use crate::filter::SkipReason;
use std::path::PathBuf;

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// A project card was written.
    Created {
        /// Repository name.
        repository: String,
        /// Path of the written file.
        path: PathBuf,
    },

    /// A project card was rendered but not written (dry run).
    Previewed {
        /// Repository name.
        repository: String,
    },

    /// The repository was filtered out.
    Skipped {
        /// Repository name.
        repository: String,
        /// Reason for skipping.
        reason: SkipReason,
    },

    /// Processing failed.
    Failed {
        /// Repository name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl ProcessingResult {
    /// Returns the repository name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Created { repository, .. }
            | Self::Previewed { repository }
            | Self::Skipped { repository, .. }
            | Self::Failed { repository, .. } => repository,
        }
    }
}
