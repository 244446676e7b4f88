//! Orchestrates project card generation.
//!
//! One repository is processed completely (README, listing, detection,
//! synthesis, write) before the next one starts.

mod config;
mod error;

pub use config::{RunMode, RunnerConfig};
pub use error::RunnerError;

use crate::filter;
use crate::github::{OctocrabClient, RepositoryApi, RepositoryMetadata};
use crate::llm::{build_description_prompt, resolve_generator, TextGenerator};
use crate::store::{ProcessedSet, ProjectStore};
use crate::summary::{ProcessingResult, RunSummary};
use crate::tech_stack::{detect_for, fallback_description};
use crate::templates::{BodyStyle, ProjectRenderer, SynthesisInput};
use tracing::{error, info, info_span, warn, Instrument};

/// Lines of a document shown in dry-run previews.
const PREVIEW_LINES: usize = 10;

/// Runs full-sync or single-repository passes.
pub struct Runner {
    config: RunnerConfig,
    api: Box<dyn RepositoryApi>,
    generator: Option<Box<dyn TextGenerator>>,
    renderer: ProjectRenderer,
    store: ProjectStore,
}

impl Runner {
    /// Builds a runner backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingCredential`] for an empty token, or an
    /// error if the HTTP client can't be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        if config.token().trim().is_empty() {
            return Err(RunnerError::MissingCredential);
        }
        let api = OctocrabClient::new(config.token(), config.owner())?;
        let generator = match config.mode() {
            RunMode::FullSync => resolve_generator(config.llm()),
            RunMode::Single(_) => None,
        };
        Ok(Self::with_api(config, Box::new(api), generator))
    }

    /// Builds a runner from explicit collaborators.
    pub fn with_api(
        config: RunnerConfig,
        api: Box<dyn RepositoryApi>,
        generator: Option<Box<dyn TextGenerator>>,
    ) -> Self {
        Self {
            renderer: ProjectRenderer::new(config.layout()),
            store: ProjectStore::new(config.output_dir()),
            config,
            api,
            generator,
        }
    }

    /// Executes the configured run.
    ///
    /// # Errors
    ///
    /// In full-sync mode only output directory failures are returned; every
    /// per-repository error is logged and recorded in the summary. In
    /// single-repository mode any error is returned.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        match self.config.mode() {
            RunMode::FullSync => self.sync_all().await,
            RunMode::Single(name) => self.sync_one(name).await,
        }
    }

    async fn sync_all(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        info!(owner = %self.config.owner(), "Starting project sync");

        let processed = self.store.scan_processed(self.config.owner())?;

        let repositories = match self.api.list_repositories(self.config.page_size()).await {
            Ok(repos) => repos,
            Err(e) => {
                error!(owner = %self.config.owner(), error = %e, "Failed to list repositories");
                return Ok(summary);
            }
        };
        info!(count = repositories.len(), "Found repositories");

        for repo in &repositories {
            if let Some(result) = skip_if_filtered(repo, &processed) {
                summary.record_result(result);
                continue;
            }

            let span = info_span!("process_repository", repo = %repo.name);
            match self
                .process_repository(repo, BodyStyle::FullReadme, self.generator.as_deref())
                .instrument(span)
                .await
            {
                Ok(result) => {
                    summary.record_result(result);
                    tokio::time::sleep(self.config.delay()).await;
                }
                Err(e) => {
                    error!(repo = %repo.name, error = %e, "Failed to process repository");
                    summary.record_result(ProcessingResult::Failed {
                        repository: repo.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(created = summary.created, "Sync complete");
        Ok(summary)
    }

    async fn sync_one(&self, name: &str) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        info!(repo = %name, "Processing single repository");

        if self.store.exists(name) {
            info!(repo = %name, "Project already exists, skipping");
            summary.record_result(ProcessingResult::Skipped {
                repository: name.to_string(),
                reason: filter::SkipReason::AlreadyProcessed,
            });
            return Ok(summary);
        }

        let processed = self.store.scan_processed(self.config.owner())?;
        let repo = self.api.get_repository(name).await?;

        if let Some(result) = skip_if_filtered(&repo, &processed) {
            summary.record_result(result);
            return Ok(summary);
        }

        let span = info_span!("process_repository", repo = %repo.name);
        let result = self
            .process_repository(&repo, BodyStyle::Excerpt, None)
            .instrument(span)
            .await?;
        summary.record_result(result);
        Ok(summary)
    }

    /// Fetches, detects, synthesizes and writes the card for one accepted repository.
    async fn process_repository(
        &self,
        repo: &RepositoryMetadata,
        body_style: BodyStyle,
        generator: Option<&dyn TextGenerator>,
    ) -> Result<ProcessingResult, RunnerError> {
        info!("Processing repository");

        let readme = self
            .api
            .get_readme(&repo.name)
            .await?
            .filter(|text| !text.trim().is_empty());
        if readme.is_none() {
            warn!("No README found, analyzing repository");
        }

        let files = match self.api.list_root_files(&repo.name).await {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, "Failed to analyze repository contents");
                Vec::new()
            }
        };

        let tech_stack = detect_for(repo, &files);
        let fallback = fallback_description(repo, &files, &tech_stack);

        let ai_description = match (generator, &readme) {
            (Some(generator), None) => {
                let prompt = build_description_prompt(repo, None, &tech_stack);
                generator.generate(&prompt).await
            }
            _ => None,
        };

        let document = self.renderer.synthesize(&SynthesisInput {
            repository: repo,
            readme: readme.as_deref(),
            ai_description: ai_description.as_deref(),
            fallback_description: &fallback,
            tech_stack: &tech_stack,
            body_style,
        })?;

        if self.config.dry_run() {
            print_dry_run_preview(repo, &document);
            return Ok(ProcessingResult::Previewed {
                repository: repo.name.clone(),
            });
        }

        let path = self.store.write(&repo.name, &document)?;
        Ok(ProcessingResult::Created {
            repository: repo.name.clone(),
            path,
        })
    }
}

/// Applies the filter, logging and returning a skip result when it rejects.
fn skip_if_filtered(
    repo: &RepositoryMetadata,
    processed: &ProcessedSet,
) -> Option<ProcessingResult> {
    let reason = filter::evaluate(repo, processed).err()?;
    info!(repo = %repo.name, reason = %reason, "Skipping repository");
    Some(ProcessingResult::Skipped {
        repository: repo.name.clone(),
        reason,
    })
}

fn print_dry_run_preview(repo: &RepositoryMetadata, document: &str) {
    println!("\n[DRY RUN] Would create {}.md:", repo.name);
    for line in document.lines().take(PREVIEW_LINES) {
        println!("    {line}");
    }
    if document.lines().count() > PREVIEW_LINES {
        println!("    ...");
    }
}
