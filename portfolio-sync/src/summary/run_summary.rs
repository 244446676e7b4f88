//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories considered.
    pub repositories_considered: usize,

    /// Number of project cards written.
    pub created: usize,

    /// Number of project cards rendered in dry-run mode.
    pub previewed: usize,

    /// Number of repositories filtered out.
    pub skipped: usize,

    /// Number of repositories that failed to process.
    pub failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Every per-repository outcome, in processing order.
    pub results: Vec<ProcessingResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        self.repositories_considered += 1;
        match &result {
            ProcessingResult::Created { .. } => self.created += 1,
            ProcessingResult::Previewed { .. } => self.previewed += 1,
            ProcessingResult::Skipped { .. } => self.skipped += 1,
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
