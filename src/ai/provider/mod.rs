//! LLM Provider Abstraction
//!
//! Defines the LlmProvider trait the orchestrator talks to: one structured
//! generation call per analysis, a plain-text call for infographic markup, and
//! a media call for transcribing uploaded files. Providers return the model's
//! raw text; parsing and validation happen in the validation layer.

mod gemini;

pub use gemini::GeminiProvider;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::LlmConfig;
use crate::types::{EthoscanError, MediaSource, Result};

// =============================================================================
// Request Description
// =============================================================================

/// A structured-output request: instruction text, user text, the expected
/// response schema, and the generation temperature. Built by the prompt
/// layer as a pure function of its inputs; carries no transport detail.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub system_instruction: String,
    pub user_text: String,
    /// Passed verbatim to the provider as the expected output shape.
    pub schema: Value,
    pub temperature: f32,
}

/// Shared provider handle for the orchestrator and export paths.
pub type SharedProvider = Arc<dyn LlmProvider + Send + Sync>;

// =============================================================================
// LLM Provider Trait
// =============================================================================

/// LLM provider trait. Implementations issue exactly one outbound call per
/// invocation: no retry, no backoff, no streaming.
#[async_trait]
pub trait LlmProvider: std::fmt::Debug + Send + Sync {
    /// Generate structured output for an analysis request, returning the
    /// model's raw text reply.
    async fn generate_structured(&self, request: &AnalysisRequest) -> Result<String>;

    /// Generate free-form text (used for raw SVG infographic markup).
    async fn generate_text(&self, prompt: &str, temperature: f32) -> Result<String>;

    /// Transcribe an uploaded media file, returning the raw transcript text.
    async fn generate_from_media(&self, media: &MediaSource, instruction: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Create a shared provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiProvider::new(config)?)),
        other => Err(EthoscanError::Config(format!(
            "Unknown provider: {}. Supported: gemini",
            other
        ))),
    }
}
