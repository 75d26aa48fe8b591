//! Analysis Orchestrator
//!
//! Drives one analysis request end to end: picks the transcript-acquisition
//! path for the caller's input, issues the single LLM call, validates the
//! reply, classifies the degenerate unknown-subject case, and stamps
//! provenance on genuine reports. Also owns the translation overlay request.
//!
//! One request is in flight at a time; transcript acquisition always completes
//! before the analysis call is issued, and nothing here retries.

pub mod transcript;

pub use transcript::{
    RemoteTranscriber, ResolvedTranscript, SharedResolver, SharedTranscriber, TranscriptResolver,
    TranscriptStore, extract_video_id,
};

use chrono::Local;
use tracing::{debug, info};
use uuid::Uuid;

use crate::ai::prompt::{self, AnalysisMode, MEDIA_TRANSCRIPTION_INSTRUCTION};
use crate::ai::provider::SharedProvider;
use crate::ai::validation::{parse_report, parse_translation};
use crate::config::ReportConfig;
use crate::constants::report::{ANALYSIS_DATE_FORMAT, UNKNOWN_SUBJECT_SENTINEL};
use crate::types::{
    AnalysisInput, AnalysisOutcome, EthoscanError, Report, Result, TranslatedOverlay,
};

/// Orchestrates analysis and translation requests against the collaborator
/// seams: the LLM provider, the transcript resolver, and the remote
/// transcriber.
pub struct Analyzer {
    provider: SharedProvider,
    resolver: SharedResolver,
    transcriber: SharedTranscriber,
    config: ReportConfig,
}

impl Analyzer {
    pub fn new(
        provider: SharedProvider,
        resolver: SharedResolver,
        transcriber: SharedTranscriber,
        config: ReportConfig,
    ) -> Self {
        Self {
            provider,
            resolver,
            transcriber,
            config,
        }
    }

    /// Run one analysis request.
    ///
    /// Returns `SubjectUnknown` when a title-mode reply carries the designated
    /// no-information sentinel; that outcome is recoverable and callers are
    /// expected to steer the user toward the transcript-based path.
    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome> {
        let request_id = Uuid::new_v4();
        info!(%request_id, source = input.source_name(), "starting analysis");

        let report = match input {
            AnalysisInput::Title(title) => {
                let report = self.analyze_title(title).await?;
                match report {
                    Some(report) => report,
                    None => {
                        info!(%request_id, "no reliable information for title");
                        return Ok(AnalysisOutcome::SubjectUnknown {
                            suggestion: format!(
                                "No reliable information was found for \"{}\". Try uploading \
                                 a sample media file so the content can be analyzed directly.",
                                title
                            ),
                        });
                    }
                }
            }
            AnalysisInput::Url(url) => {
                let resolved = self.resolver.resolve(url).await.map_err(analysis_failure)?;
                let transcript = match resolved.transcript {
                    Some(existing) => {
                        debug!(%request_id, video_id = %resolved.video_id, "existing transcript found");
                        existing
                    }
                    None => {
                        debug!(%request_id, video_id = %resolved.video_id, "transcribing remotely");
                        self.transcriber
                            .transcribe(&resolved.video_id)
                            .await
                            .map_err(analysis_failure)?
                    }
                };
                self.analyze_transcript(url, &transcript).await?
            }
            AnalysisInput::File(media) => {
                let transcript = self
                    .provider
                    .generate_from_media(media, MEDIA_TRANSCRIPTION_INSTRUCTION)
                    .await
                    .map_err(analysis_failure)?;
                if transcript.trim().is_empty() {
                    return Err(EthoscanError::NoTranscriptProduced {
                        origin: media.name.clone(),
                    });
                }
                self.analyze_transcript(&media.name, &transcript).await?
            }
        };

        info!(%request_id, themes = report.thematic_analysis.len(), "analysis complete");
        Ok(AnalysisOutcome::Analyzed(self.finalize(report, input)))
    }

    /// Request a translation overlay for an existing report.
    ///
    /// Idempotent per report; callers cache the result via
    /// [`Report::attach_translation`] instead of re-invoking.
    pub async fn translate(&self, report: &Report) -> Result<TranslatedOverlay> {
        let request = prompt::translation_request(report, &self.config.translation_language);
        let raw = self
            .provider
            .generate_structured(&request)
            .await
            .map_err(translation_failure)?;
        parse_translation(&raw, report.thematic_analysis.len())
    }

    /// Title-mode analysis. `None` means the model emitted the designated
    /// no-information sentinel.
    async fn analyze_title(&self, title: &str) -> Result<Option<Report>> {
        let request = prompt::analysis_request(
            &AnalysisMode::BySubjectTitle { title },
            &self.config.language,
        );
        let raw = self
            .provider
            .generate_structured(&request)
            .await
            .map_err(analysis_failure)?;
        let report = parse_report(&raw)?;

        if report.overall_summary == UNKNOWN_SUBJECT_SENTINEL {
            return Ok(None);
        }
        Ok(Some(report))
    }

    async fn analyze_transcript(&self, source_name: &str, text: &str) -> Result<Report> {
        let request = prompt::analysis_request(
            &AnalysisMode::FromTranscript {
                source_name,
                transcript: text,
            },
            &self.config.language,
        );
        let raw = self
            .provider
            .generate_structured(&request)
            .await
            .map_err(analysis_failure)?;
        parse_report(&raw)
    }

    /// Stamp provenance metadata on a genuine report.
    fn finalize(&self, mut report: Report, input: &AnalysisInput) -> Report {
        report.source = Some(input.source_name().to_string());
        report.analysis_date = Some(Local::now().format(ANALYSIS_DATE_FORMAT).to_string());
        report
    }
}

/// Collaborator failures surface as `AnalysisFailed` with the underlying
/// cause message; input and contract errors keep their own variants.
fn analysis_failure(err: EthoscanError) -> EthoscanError {
    match err {
        passthrough @ (EthoscanError::InvalidUrl(_)
        | EthoscanError::NoTranscriptProduced { .. }
        | EthoscanError::MalformedResponse(_)
        | EthoscanError::AnalysisFailed(_)) => passthrough,
        other => EthoscanError::AnalysisFailed(other.to_string()),
    }
}

fn translation_failure(err: EthoscanError) -> EthoscanError {
    match err {
        passthrough @ (EthoscanError::MalformedResponse(_)
        | EthoscanError::TranslationFailed(_)) => passthrough,
        other => EthoscanError::TranslationFailed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::{AnalysisRequest, LlmProvider};
    use crate::types::{ConcernLevel, MediaSource, ThematicItem};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    // -------------------------------------------------------------------------
    // Mock collaborators
    // -------------------------------------------------------------------------

    #[derive(Debug, Default)]
    struct MockProvider {
        replies: Mutex<VecDeque<Result<String>>>,
        requests: Mutex<Vec<AnalysisRequest>>,
        media_transcript: Mutex<Option<String>>,
    }

    impl MockProvider {
        fn with_reply(raw: impl Into<String>) -> Arc<Self> {
            let mock = Self::default();
            mock.replies.lock().unwrap().push_back(Ok(raw.into()));
            Arc::new(mock)
        }

        fn failing(message: &str) -> Arc<Self> {
            let mock = Self::default();
            mock.replies
                .lock()
                .unwrap()
                .push_back(Err(EthoscanError::LlmApi(message.to_string())));
            Arc::new(mock)
        }

        fn with_media_transcript(self: Arc<Self>, transcript: &str) -> Arc<Self> {
            *self.media_transcript.lock().unwrap() = Some(transcript.to_string());
            self
        }

        fn recorded_requests(&self) -> Vec<AnalysisRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn generate_structured(&self, request: &AnalysisRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(EthoscanError::LlmApi("no scripted reply".to_string())))
        }

        async fn generate_text(&self, _prompt: &str, _temperature: f32) -> Result<String> {
            Err(EthoscanError::LlmApi("unexpected text request".to_string()))
        }

        async fn generate_from_media(
            &self,
            _media: &MediaSource,
            _instruction: &str,
        ) -> Result<String> {
            self.media_transcript
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| EthoscanError::LlmApi("no scripted media transcript".to_string()))
        }

        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }
    }

    #[derive(Default)]
    struct MockTranscriber {
        reply: String,
        called: AtomicBool,
        video_id: Mutex<Option<String>>,
    }

    impl MockTranscriber {
        fn with_reply(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                ..Self::default()
            })
        }
    }

    #[async_trait]
    impl RemoteTranscriber for MockTranscriber {
        async fn transcribe(&self, video_id: &str) -> Result<String> {
            self.called.store(true, Ordering::SeqCst);
            *self.video_id.lock().unwrap() = Some(video_id.to_string());
            Ok(self.reply.clone())
        }
    }

    fn analyzer(
        provider: Arc<MockProvider>,
        resolver: TranscriptStore,
        transcriber: Arc<MockTranscriber>,
    ) -> Analyzer {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Analyzer::new(
            provider,
            Arc::new(resolver),
            transcriber,
            ReportConfig::default(),
        )
    }

    fn valid_reply(title: &str) -> String {
        json!({
            "title": title,
            "overallSummary": "A layered social satire.",
            "overallConcernLevel": 40,
            "thematicAnalysis": [{
                "theme": "Representation",
                "analysis": "Class divides drive every conflict.",
                "concernLevel": 30
            }],
            "positiveAspectsSummary": "Sharp critique of inequality.",
            "concludingRemarks": "Best suited for mature audiences."
        })
        .to_string()
    }

    fn degenerate_reply(title: &str) -> String {
        json!({
            "title": title,
            "overallSummary": UNKNOWN_SUBJECT_SENTINEL,
            "overallConcernLevel": 0,
            "thematicAnalysis": [],
            "positiveAspectsSummary": "Not applicable due to lack of information.",
            "concludingRemarks": "Not applicable due to lack of information."
        })
        .to_string()
    }

    // -------------------------------------------------------------------------
    // Title path
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_title_analysis_stamps_provenance() {
        let provider = MockProvider::with_reply(valid_reply("Parasite"));
        let analyzer = analyzer(
            provider.clone(),
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let outcome = analyzer
            .analyze(&AnalysisInput::Title("Parasite".to_string()))
            .await
            .unwrap();

        let report = outcome.report().expect("genuine report");
        assert_eq!(report.source.as_deref(), Some("Parasite"));
        assert!(report.analysis_date.is_some());
        assert_eq!(report.overall_concern_level.get(), 40);

        let requests = provider.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].user_text.contains("\"Parasite\""));
    }

    #[tokio::test]
    async fn test_sentinel_summary_raises_subject_unknown() {
        let provider = MockProvider::with_reply(degenerate_reply("Obscure Show"));
        let analyzer = analyzer(
            provider,
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let outcome = analyzer
            .analyze(&AnalysisInput::Title("Obscure Show".to_string()))
            .await
            .unwrap();

        match outcome {
            AnalysisOutcome::SubjectUnknown { suggestion } => {
                assert!(suggestion.contains("Obscure Show"));
            }
            AnalysisOutcome::Analyzed(_) => panic!("degenerate report must not be returned"),
        }
    }

    #[tokio::test]
    async fn test_sentinel_is_title_mode_only() {
        let mut store = TranscriptStore::new();
        store.insert("abc12345678", "Some transcript text.");
        let provider = MockProvider::with_reply(degenerate_reply("clip"));
        let analyzer = analyzer(provider, store, MockTranscriber::default().into());

        // A transcript-mode reply that happens to carry the sentinel is still
        // a genuine report.
        let outcome = analyzer
            .analyze(&AnalysisInput::Url("https://youtu.be/abc12345678".to_string()))
            .await
            .unwrap();
        assert!(outcome.report().is_some());
    }

    // -------------------------------------------------------------------------
    // URL path
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_existing_transcript_short_circuits_remote() {
        let mut store = TranscriptStore::new();
        store.insert("abc12345678", "Canned transcript text.");
        let provider = MockProvider::with_reply(valid_reply("clip"));
        let transcriber = MockTranscriber::with_reply("should not be used");
        let analyzer = analyzer(provider.clone(), store, transcriber.clone());

        analyzer
            .analyze(&AnalysisInput::Url("https://youtu.be/abc12345678".to_string()))
            .await
            .unwrap();

        assert!(!transcriber.called.load(Ordering::SeqCst));
        let requests = provider.recorded_requests();
        assert!(requests[0].user_text.contains("Canned transcript text."));
    }

    #[tokio::test]
    async fn test_missing_transcript_transcribes_before_analysis() {
        let provider = MockProvider::with_reply(valid_reply("clip"));
        let transcriber = MockTranscriber::with_reply("Remote transcript text.");
        let analyzer = analyzer(provider.clone(), TranscriptStore::new(), transcriber.clone());

        analyzer
            .analyze(&AnalysisInput::Url("https://youtu.be/abc12345678".to_string()))
            .await
            .unwrap();

        assert_eq!(
            transcriber.video_id.lock().unwrap().as_deref(),
            Some("abc12345678")
        );
        // The analysis call carries the remote transcript, so transcription
        // completed first.
        let requests = provider.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].user_text.contains("Remote transcript text."));
    }

    #[tokio::test]
    async fn test_invalid_url_surfaces_verbatim() {
        let provider = MockProvider::with_reply(valid_reply("clip"));
        let analyzer = analyzer(
            provider.clone(),
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let err = analyzer
            .analyze(&AnalysisInput::Url("https://example.com/clip".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, EthoscanError::InvalidUrl(_)));
        assert!(provider.recorded_requests().is_empty());
    }

    // -------------------------------------------------------------------------
    // File path
    // -------------------------------------------------------------------------

    fn media() -> MediaSource {
        MediaSource {
            name: "clip.mp3".to_string(),
            mime_type: "audio/mpeg".to_string(),
            bytes: vec![0; 32],
        }
    }

    #[tokio::test]
    async fn test_file_flow_analyzes_transcript() {
        let provider =
            MockProvider::with_reply(valid_reply("clip.mp3")).with_media_transcript("Hello there.");
        let analyzer = analyzer(
            provider.clone(),
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let outcome = analyzer
            .analyze(&AnalysisInput::File(media()))
            .await
            .unwrap();

        assert_eq!(
            outcome.report().unwrap().source.as_deref(),
            Some("clip.mp3")
        );
        let requests = provider.recorded_requests();
        assert!(requests[0].user_text.contains("Hello there."));
    }

    #[tokio::test]
    async fn test_empty_file_transcript_fails_fast() {
        let provider = MockProvider::with_reply(valid_reply("clip.mp3"))
            .with_media_transcript("   \n");
        let analyzer = analyzer(
            provider.clone(),
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let err = analyzer
            .analyze(&AnalysisInput::File(media()))
            .await
            .unwrap_err();

        assert!(matches!(err, EthoscanError::NoTranscriptProduced { .. }));
        // No analysis call was issued.
        assert!(provider.recorded_requests().is_empty());
    }

    // -------------------------------------------------------------------------
    // Failure mapping
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_provider_failure_becomes_analysis_failed() {
        let provider = MockProvider::failing("upstream exploded");
        let analyzer = analyzer(
            provider,
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let err = analyzer
            .analyze(&AnalysisInput::Title("Parasite".to_string()))
            .await
            .unwrap_err();

        match err {
            EthoscanError::AnalysisFailed(message) => {
                assert!(message.contains("upstream exploded"));
            }
            other => panic!("expected AnalysisFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_reply_is_malformed_response() {
        let provider = MockProvider::with_reply("not json");
        let analyzer = analyzer(
            provider,
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let err = analyzer
            .analyze(&AnalysisInput::Title("Parasite".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, EthoscanError::MalformedResponse(_)));
    }

    // -------------------------------------------------------------------------
    // Translation
    // -------------------------------------------------------------------------

    fn base_report(items: usize) -> Report {
        Report {
            title: "Parasite".to_string(),
            overall_summary: "A layered social satire.".to_string(),
            overall_concern_level: ConcernLevel::new(40).unwrap(),
            thematic_analysis: (0..items)
                .map(|i| ThematicItem {
                    theme: format!("Theme {}", i),
                    analysis: format!("Analysis {}", i),
                    concern_level: ConcernLevel::new(30).unwrap(),
                })
                .collect(),
            positive_aspects_summary: "Sharp critique.".to_string(),
            concluding_remarks: "For mature audiences.".to_string(),
            source: Some("Parasite".to_string()),
            analysis_date: Some("2026-08-06".to_string()),
            translated: None,
        }
    }

    #[tokio::test]
    async fn test_translation_round_trip_preserves_base() {
        let reply = json!({
            "overallSummary": "Una sátira social estratificada.",
            "concludingRemarks": "Para público adulto.",
            "thematicAnalysis": [
                {"analysis": "Traducción cero."},
                {"analysis": "Traducción uno."}
            ]
        })
        .to_string();

        let analyzer = analyzer(
            MockProvider::with_reply(reply),
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let mut report = base_report(2);
        let original = report.clone();
        let overlay = analyzer.translate(&report).await.unwrap();

        assert_eq!(overlay.thematic_analysis.len(), 2);
        report.attach_translation(overlay);
        assert_eq!(report.overall_summary, original.overall_summary);
        assert_eq!(report.thematic_analysis, original.thematic_analysis);
        assert_eq!(report.overall_concern_level, original.overall_concern_level);
    }

    #[tokio::test]
    async fn test_translation_length_mismatch_is_malformed() {
        let reply = json!({
            "overallSummary": "Una sátira.",
            "concludingRemarks": "Fin.",
            "thematicAnalysis": [{"analysis": "Solo una."}]
        })
        .to_string();

        let analyzer = analyzer(
            MockProvider::with_reply(reply),
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let err = analyzer.translate(&base_report(2)).await.unwrap_err();
        assert!(matches!(err, EthoscanError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_translation_failure_maps_to_translation_failed() {
        let analyzer = analyzer(
            MockProvider::failing("upstream exploded"),
            TranscriptStore::new(),
            MockTranscriber::default().into(),
        );

        let err = analyzer.translate(&base_report(1)).await.unwrap_err();
        match err {
            EthoscanError::TranslationFailed(message) => {
                assert!(message.contains("upstream exploded"));
            }
            other => panic!("expected TranslationFailed, got {:?}", other),
        }
    }
}
