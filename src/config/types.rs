//! Configuration Types
//!
//! The explicit configuration object handed to whatever constructs the LLM
//! provider. Validated once at application startup; a missing credential is a
//! fatal configuration error, not a runtime surprise.

use serde::{Deserialize, Serialize};

use crate::constants::{network, report};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider settings
    pub llm: LlmConfig,

    /// Report output settings
    pub report: ReportConfig,
}

impl Config {
    /// Validate configuration values.
    /// Returns `EthoscanError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self
            .llm
            .api_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty())
        {
            return Err(crate::types::EthoscanError::Config(
                "LLM API key not set. Provide llm.api_key or the GEMINI_API_KEY env var"
                    .to_string(),
            ));
        }

        if self.llm.timeout_secs == 0 {
            return Err(crate::types::EthoscanError::Config(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.report.language.trim().is_empty() {
            return Err(crate::types::EthoscanError::Config(
                "report.language must not be empty".to_string(),
            ));
        }

        if self.report.translation_language.trim().is_empty() {
            return Err(crate::types::EthoscanError::Config(
                "report.translation_language must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

/// Configuration for the LLM provider
///
/// Note: the API key is handled securely - it is never serialized to output
/// and is redacted in debug output. The provider converts the key to
/// SecretString internally for runtime protection.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (only "gemini" is currently supported)
    pub provider: String,

    /// Model name
    pub model: String,

    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,

    /// API key. Never serialized to output for security
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: network::DEFAULT_MODEL.to_string(),
            api_base: None,
            api_key: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Report Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output language for generated reports
    pub language: String,

    /// Target language for the translation overlay
    pub translation_language: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: report::DEFAULT_LANGUAGE.to_string(),
            translation_language: report::DEFAULT_TRANSLATION_LANGUAGE.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
