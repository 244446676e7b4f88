//! LLM error types.

use thiserror::Error;

/// Internal error type for model resolution and text generation.
#[derive(Debug, Error)]
pub(crate) enum LlmError {
    /// Model error.
    #[error("Model error: {0}")]
    Model(#[from] serdes_ai_models::ModelError),

    /// Agent run error.
    #[error("Agent run error: {0}")]
    AgentRun(#[from] serdes_ai::agent::AgentRunError),

    /// Generation timed out.
    #[error("LLM timed out after {0} seconds")]
    Timeout(u64),

    /// The model returned no usable text.
    #[error("LLM returned an empty response")]
    EmptyResponse,
}
