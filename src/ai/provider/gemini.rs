//! Gemini API Provider
//!
//! LLM provider using the Gemini `generateContent` API. Structured requests
//! carry the response schema in `generationConfig` so the model replies with
//! JSON; media requests attach the file as a base64 inline-data part.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::{AnalysisRequest, LlmProvider};
use crate::config::LlmConfig;
use crate::constants::network;
use crate::types::{EthoscanError, MediaSource, Result};

/// Gemini API provider with secure API key handling
pub struct GeminiProvider {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                EthoscanError::Config(
                    "Gemini API key not found. Set GEMINI_API_KEY env var or provide in config"
                        .to_string(),
                )
            })?;

        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| network::DEFAULT_API_BASE.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EthoscanError::LlmApi(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key_str),
            api_base,
            model: config.model.clone(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn structured_request(&self, request: &AnalysisRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Some(Content {
                parts: vec![Part::text(&request.system_instruction)],
            }),
            contents: vec![Content {
                parts: vec![Part::text(&request.user_text)],
            }],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(request.schema.clone()),
            }),
        }
    }

    fn text_request(&self, prompt: &str, temperature: f32) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: Some(GenerationConfig {
                temperature,
                response_mime_type: None,
                response_schema: None,
            }),
        }
    }

    fn media_request(&self, media: &MediaSource, instruction: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                parts: vec![
                    Part::inline_data(&media.mime_type, BASE64.encode(&media.bytes)),
                    Part::text(instruction),
                ],
            }],
            generation_config: None,
        }
    }

    async fn execute(&self, request: &GenerateContentRequest) -> Result<String> {
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| EthoscanError::LlmApi(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EthoscanError::LlmApi(format!(
                "Gemini API error ({}): {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| EthoscanError::LlmApi(format!("Failed to parse Gemini response: {}", e)))?;

        body.into_text()
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate_structured(&self, request: &AnalysisRequest) -> Result<String> {
        info!(
            "Generating with Gemini (model: {}, temperature: {})",
            self.model, request.temperature
        );
        self.execute(&self.structured_request(request)).await
    }

    async fn generate_text(&self, prompt: &str, temperature: f32) -> Result<String> {
        info!(
            "Generating text with Gemini (model: {}, temperature: {})",
            self.model, temperature
        );
        self.execute(&self.text_request(prompt, temperature)).await
    }

    async fn generate_from_media(&self, media: &MediaSource, instruction: &str) -> Result<String> {
        info!(
            "Transcribing media with Gemini (file: {}, mime: {}, {} bytes)",
            media.name,
            media.mime_type,
            media.bytes.len()
        );
        self.execute(&self.media_request(media, instruction)).await
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline_data(mime_type: &str, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(EthoscanError::LlmApi(
                "No content in Gemini response".to_string(),
            ));
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
