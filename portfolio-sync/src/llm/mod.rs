//! Optional AI-written project descriptions.
//!
//! Generation is strictly best-effort: a missing configuration disables it,
//! and any failure is logged and reported as "no text".

mod config;
mod error;

pub use config::{LlmConfig, Provider};
use config::{default_max_words, default_temperature, default_timeout_secs};
pub(crate) use error::LlmError;

use crate::github::RepositoryMetadata;
use crate::tech_stack::TechStack;
use async_trait::async_trait;
use serdes_ai::agent::{Agent, AgentBuilder};
use serdes_ai_models::{infer_model, Model};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Environment variable naming a `provider:model` spec when no `[llm]` section exists.
pub const MODEL_ENV: &str = "PORTFOLIO_SYNC_LLM_MODEL";

/// Characters of README text included in a prompt.
const README_PROMPT_CHARS: usize = 500;

const SYSTEM_PROMPT: &str =
    "You write short, engaging project descriptions for a developer portfolio. \
Reply with the description only, without headings or lists.";

/// Produces free-form text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text, or `None` when generation is unavailable or fails.
    async fn generate(&self, prompt: &str) -> Option<String>;
}

/// [`TextGenerator`] backed by a serdes-ai model.
pub struct ModelTextGenerator {
    model: Arc<dyn Model>,
    temperature: Option<f64>,
    max_words: usize,
    timeout_secs: u64,
}

impl ModelTextGenerator {
    fn new(model: Arc<dyn Model>, config: Option<&LlmConfig>) -> Self {
        Self {
            model,
            temperature: validate_temperature(
                config.map_or_else(default_temperature, |c| c.temperature),
            ),
            max_words: config.map_or_else(default_max_words, |c| c.max_words),
            timeout_secs: config.map_or_else(default_timeout_secs, |c| c.timeout_secs),
        }
    }

    async fn try_generate(&self, prompt: &str) -> Result<String, LlmError> {
        let mut builder =
            AgentBuilder::from_arc(Arc::clone(&self.model)).system_prompt(SYSTEM_PROMPT);
        if let Some(temperature) = self.temperature {
            builder = builder.temperature(temperature);
        }
        let agent: Agent<(), String> = builder.build();

        let result = tokio::time::timeout(
            tokio::time::Duration::from_secs(self.timeout_secs),
            agent.run(prompt.to_string(), ()),
        )
        .await
        .map_err(|_| LlmError::Timeout(self.timeout_secs))??;

        let text = clamp_words(result.output.trim(), self.max_words);
        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for ModelTextGenerator {
    async fn generate(&self, prompt: &str) -> Option<String> {
        match self.try_generate(prompt).await {
            Ok(text) => {
                debug!(words = text.split_whitespace().count(), "Generated description");
                Some(text)
            }
            Err(e) => {
                warn!(error = %e, "AI generation failed");
                None
            }
        }
    }
}

/// Builds the configured text generator, if any.
///
/// Uses the `[llm]` section when present, else [`MODEL_ENV`]. Returns `None`
/// when neither is set or the model can't be built.
pub fn resolve_generator(config: Option<&LlmConfig>) -> Option<Box<dyn TextGenerator>> {
    match resolve_model(config) {
        Ok(Some(model)) => {
            info!("AI descriptions enabled");
            Some(Box::new(ModelTextGenerator::new(model, config)))
        }
        Ok(None) => {
            info!("No LLM configured, skipping AI generation");
            None
        }
        Err(e) => {
            warn!(error = %e, "Failed to set up LLM, skipping AI generation");
            None
        }
    }
}

/// Resolves the model from config or environment.
fn resolve_model(config: Option<&LlmConfig>) -> Result<Option<Arc<dyn Model>>, LlmError> {
    if let Some(config) = config {
        return config.build_model().map(Some);
    }
    match std::env::var(MODEL_ENV) {
        Ok(spec) if !spec.trim().is_empty() => Ok(Some(infer_model(spec.trim())?)),
        _ => Ok(None),
    }
}

/// Validates that a temperature value is finite and within 0.0-2.0.
fn validate_temperature(value: f64) -> Option<f64> {
    if !value.is_finite() || !(0.0..=2.0).contains(&value) {
        warn!(
            "Invalid temperature {value}: must be finite and in range 0.0-2.0, using provider default"
        );
        return None;
    }
    Some(value)
}

/// Builds the description prompt for a repository without a README.
#[must_use]
pub fn build_description_prompt(
    repo: &RepositoryMetadata,
    readme: Option<&str>,
    stack: &TechStack,
) -> String {
    let readme_excerpt = readme
        .map(|text| text.chars().take(README_PROMPT_CHARS).collect::<String>())
        .unwrap_or_else(|| "No README".to_string());
    let stack = if stack.is_empty() {
        "Unknown".to_string()
    } else {
        stack.joined()
    };

    format!(
        "Generate a concise project description (2-3 sentences, max 200 words) for a GitHub repository:\n\
\n\
Repository: {name}\n\
Description: {description}\n\
Language: {language}\n\
Technologies: {stack}\n\
README excerpt: {readme_excerpt}\n\
\n\
Format the response as a brief, engaging portfolio description.",
        name = repo.name,
        description = repo.description.as_deref().unwrap_or("No description"),
        language = repo.language.as_deref().unwrap_or("Unknown"),
    )
}

/// Keeps at most `max_words` whitespace-separated words.
fn clamp_words(text: &str, max_words: usize) -> String {
    if text.split_whitespace().count() <= max_words {
        return text.to_string();
    }
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
