#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod filter;
pub mod github;
pub mod llm;
pub mod runner;
pub mod store;
pub mod summary;
pub mod tech_stack;
pub mod templates;

pub use config::{load_site_config, ConfigError, SiteConfig};
pub use filter::{evaluate, should_process, SkipReason};
pub use github::{GitHubError, OctocrabClient, RepositoryApi, RepositoryMetadata};
pub use llm::{build_description_prompt, resolve_generator, LlmConfig, Provider, TextGenerator};
pub use runner::{RunMode, Runner, RunnerConfig, RunnerError};
pub use store::{ProcessedSet, ProjectStore, StoreError};
pub use summary::{ProcessingResult, RunSummary};
pub use tech_stack::{detect, fallback_description, feature_highlights, TechStack};
pub use templates::{
    derive_date, derive_title, live_link, readme_excerpt, source_link, tech_label, BodyStyle,
    ProjectRenderer, SynthesisInput, TemplateError,
};
