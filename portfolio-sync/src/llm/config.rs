//! Text generation provider configuration.

use crate::llm::error::LlmError;
use serde::Deserialize;
use serdes_ai_models::{build_model_with_config, infer_model, openrouter::OpenRouterModel, Model};
use std::sync::Arc;
use std::time::Duration;

/// Supported model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// OpenAI.
    OpenAi,
    /// OpenRouter.
    OpenRouter,
    /// Anthropic.
    Anthropic,
    /// Google Gemini.
    Gemini,
}

impl Provider {
    /// Provider prefix used in `provider:model` specs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::OpenRouter => "openrouter",
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
        }
    }

    /// Environment variable holding the provider's API key.
    #[must_use]
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::Gemini => "GOOGLE_API_KEY",
        }
    }
}

/// The `[llm]` section of `portfolio.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LlmConfig {
    /// Model provider.
    pub provider: Provider,

    /// Model name (e.g., "gpt-4o-mini").
    pub model: String,

    /// API key; falls back to the provider's environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL override.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on the words kept from a generated description.
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl LlmConfig {
    /// Creates a configuration for `provider:model` with default limits.
    #[must_use]
    pub fn new(provider: Provider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            api_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
            max_words: default_max_words(),
            temperature: default_temperature(),
        }
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the explicit key, or the provider's environment variable.
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(self.provider.api_key_env()).ok())
    }

    /// Builds a model from the configuration.
    pub(crate) fn build_model(&self) -> Result<Arc<dyn Model>, LlmError> {
        let api_key = self.resolved_api_key();

        if self.provider == Provider::OpenRouter {
            let model = match api_key {
                Some(key) => OpenRouterModel::new(&self.model, key),
                None => OpenRouterModel::from_env(&self.model)?,
            };
            return Ok(Arc::new(model.with_app_title("portfolio-sync")));
        }

        if api_key.is_none() && self.base_url.is_none() {
            let spec = format!("{}:{}", self.provider.as_str(), self.model);
            return Ok(infer_model(&spec)?);
        }

        Ok(build_model_with_config(
            self.provider.as_str(),
            &self.model,
            api_key.as_deref(),
            self.base_url.as_deref(),
            Some(self.timeout()),
        )?)
    }
}

pub(crate) fn default_timeout_secs() -> u64 {
    60
}

pub(crate) fn default_max_words() -> usize {
    200
}

pub(crate) fn default_temperature() -> f64 {
    0.7
}
