//! SVG Infographic Generation
//!
//! Requests raw SVG markup for a report from the LLM collaborator and
//! validates the reply before handing it to a view. Collaborator failures
//! surface as `ExportFailed`; a reply that is not a complete SVG document is
//! `InvalidGraphic`.

use tracing::info;

use crate::ai::prompt;
use crate::ai::provider::LlmProvider;
use crate::ai::validation::validate_svg;
use crate::constants::temperature;
use crate::types::{EthoscanError, Report, Result};

/// Generate a self-contained SVG infographic for a report.
pub async fn generate_infographic(provider: &dyn LlmProvider, report: &Report) -> Result<String> {
    info!(title = %report.title, "generating infographic");

    let prompt = prompt::infographic_prompt(report);
    let raw = provider
        .generate_text(&prompt, temperature::INFOGRAPHIC)
        .await
        .map_err(export_failure)?;

    validate_svg(&raw)
}

fn export_failure(err: EthoscanError) -> EthoscanError {
    match err {
        passthrough @ (EthoscanError::InvalidGraphic(_) | EthoscanError::ExportFailed(_)) => {
            passthrough
        }
        other => EthoscanError::ExportFailed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::AnalysisRequest;
    use crate::types::{ConcernLevel, MediaSource};
    use async_trait::async_trait;

    #[derive(Debug)]
    struct TextProvider {
        reply: std::result::Result<String, String>,
    }

    impl TextProvider {
        fn with_reply(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for TextProvider {
        async fn generate_structured(&self, _request: &AnalysisRequest) -> Result<String> {
            Err(EthoscanError::LlmApi("unexpected structured request".to_string()))
        }

        async fn generate_text(&self, _prompt: &str, _temperature: f32) -> Result<String> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(EthoscanError::LlmApi(message.clone())),
            }
        }

        async fn generate_from_media(
            &self,
            _media: &MediaSource,
            _instruction: &str,
        ) -> Result<String> {
            Err(EthoscanError::LlmApi("unexpected media request".to_string()))
        }

        fn name(&self) -> &str {
            "text-mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }
    }

    fn report() -> Report {
        Report {
            title: "Parasite".to_string(),
            overall_summary: "A layered social satire.".to_string(),
            overall_concern_level: ConcernLevel::new(40).unwrap(),
            thematic_analysis: Vec::new(),
            positive_aspects_summary: "Sharp critique.".to_string(),
            concluding_remarks: "For mature audiences.".to_string(),
            source: None,
            analysis_date: None,
            translated: None,
        }
    }

    #[tokio::test]
    async fn test_valid_svg_reply_is_returned() {
        let provider = TextProvider::with_reply(r#"<svg viewBox="0 0 800 600"></svg>"#);
        let svg = generate_infographic(&provider, &report()).await.unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[tokio::test]
    async fn test_non_svg_reply_is_invalid_graphic() {
        let provider = TextProvider::with_reply("Sorry, I cannot draw that.");
        let err = generate_infographic(&provider, &report()).await.unwrap_err();
        assert!(matches!(err, EthoscanError::InvalidGraphic(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_is_export_failed() {
        let provider = TextProvider::failing("upstream exploded");
        let err = generate_infographic(&provider, &report()).await.unwrap_err();
        match err {
            EthoscanError::ExportFailed(message) => {
                assert!(message.contains("upstream exploded"));
            }
            other => panic!("expected ExportFailed, got {:?}", other),
        }
    }
}
