//! Unified Error Type System
//!
//! Centralized error types for the entire crate.
//!
//! ## Error Categories
//!
//! - **Input**: the caller's URL or file cannot yield a transcript
//!   (`InvalidUrl`, `NoTranscriptProduced`)
//! - **Contract**: the model's reply failed schema validation
//!   (`MalformedResponse`, `InvalidGraphic`)
//! - **Request**: a collaborator call failed, surfaced with the underlying
//!   cause message (`AnalysisFailed`, `TranslationFailed`, `ExportFailed`)
//! - **System**: IO/JSON/configuration faults
//!
//! Every error is terminal for the current request: the core never retries.
//! Whether to offer a manual retry affordance is a presentation-layer decision.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EthoscanError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    /// The URL cannot be resolved to a platform video identifier.
    #[error("invalid video URL: {0}")]
    InvalidUrl(String),

    /// File or remote transcription yielded no usable text.
    #[error("no usable transcript was produced from '{origin}'")]
    NoTranscriptProduced { origin: String },

    // -------------------------------------------------------------------------
    // Contract Errors
    // -------------------------------------------------------------------------
    /// The model's reply could not be parsed into a valid report.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// The model did not return a well-formed SVG document.
    #[error("invalid infographic markup: {0}")]
    InvalidGraphic(String),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    /// A collaborator call failed while producing an analysis.
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),

    /// A collaborator call failed while translating a report.
    #[error("translation failed: {0}")]
    TranslationFailed(String),

    /// A collaborator call failed while exporting a report.
    #[error("export failed: {0}")]
    ExportFailed(String),

    // -------------------------------------------------------------------------
    // System Errors
    // -------------------------------------------------------------------------
    /// Raw LLM API failure (transport, status, or empty reply).
    #[error("LLM API error: {0}")]
    LlmApi(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EthoscanError>;

impl EthoscanError {
    /// Create a malformed-response error with field context.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// True for errors the caller can fix by changing the input rather than
    /// by re-running the same request.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::NoTranscriptProduced { .. }
        )
    }
}
