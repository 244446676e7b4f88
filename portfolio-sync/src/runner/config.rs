//! Runner configuration.

use crate::config::SiteConfig;
use crate::llm::LlmConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which repositories a run processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Every eligible repository of the owner.
    FullSync,
    /// Exactly one named repository.
    Single(String),
}

/// Configuration for a sync run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Account whose repositories are processed.
    owner: String,
    /// Directory receiving the project cards.
    output_dir: PathBuf,
    /// Front-matter layout value.
    layout: String,
    /// Repositories requested in full-sync mode.
    page_size: u8,
    /// Pause after each processed repository in full-sync mode.
    delay: Duration,
    /// Full-sync or single-repository mode.
    mode: RunMode,
    /// Whether to preview documents instead of writing them.
    dry_run: bool,
    /// Optional text generation provider.
    llm: Option<LlmConfig>,
}

impl RunnerConfig {
    /// Creates a full-sync configuration from the site settings.
    pub fn new(token: String, site: SiteConfig) -> Self {
        let delay = site.delay();
        Self {
            token,
            owner: site.owner,
            output_dir: site.output_dir,
            layout: site.layout,
            page_size: site.page_size,
            delay,
            mode: RunMode::FullSync,
            dry_run: false,
            llm: site.llm,
        }
    }

    /// Restricts the run to one repository when `name` is given.
    pub fn with_repository(mut self, name: Option<String>) -> Self {
        self.mode = match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => RunMode::Single(name.trim().to_string()),
            None => RunMode::FullSync,
        };
        self
    }

    /// Sets dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Overrides the owner.
    pub fn with_owner(mut self, owner: String) -> Self {
        self.owner = owner;
        self
    }

    /// Overrides the output directory.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Overrides the inter-repository delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the front-matter layout.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Returns the full-sync page size.
    pub fn page_size(&self) -> u8 {
        self.page_size
    }

    /// Returns the inter-repository delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the run mode.
    pub fn mode(&self) -> &RunMode {
        &self.mode
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the text generation provider configuration.
    pub fn llm(&self) -> Option<&LlmConfig> {
        self.llm.as_ref()
    }
}
