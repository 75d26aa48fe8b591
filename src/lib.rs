//! Ethoscan - AI-Driven Ethical Media Analysis
//!
//! Produces structured ethical-analysis reports for films, series, video
//! URLs, and uploaded audio/video files by driving an LLM collaborator
//! through a strict response contract.
//!
//! ## Core Features
//!
//! - **Response Contract**: one extended report schema requested from the
//!   model and enforced on the way back in, all-or-nothing
//! - **Three Input Paths**: direct title research, URL-resolved transcripts
//!   with a remote-transcription fallback, and uploaded-media transcription
//! - **Tagged Outcomes**: the unknown-title case is a recoverable outcome,
//!   never a sentinel string leaked to presentation code
//! - **Translation Overlay**: free-text fields translated on demand and
//!   attached to the report without touching the original content
//! - **Export**: markdown documents and LLM-generated SVG infographics
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use ethoscan::{
//!     AnalysisInput, AnalysisOutcome, Analyzer, ConfigLoader, TranscriptStore,
//!     create_provider,
//! };
//!
//! let config = ConfigLoader::load()?;
//! let provider = create_provider(&config.llm)?;
//! let analyzer = Analyzer::new(
//!     provider,
//!     Arc::new(TranscriptStore::new()),
//!     transcriber,
//!     config.report,
//! );
//!
//! match analyzer.analyze(&AnalysisInput::Title("Parasite".into())).await? {
//!     AnalysisOutcome::Analyzed(report) => println!("{}", report.title),
//!     AnalysisOutcome::SubjectUnknown { suggestion } => println!("{}", suggestion),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: prompt construction, response schemas, the LLM provider, and
//!   reply validation
//! - [`analyzer`]: the analysis orchestrator and transcript acquisition seams
//! - [`export`]: document rendering and infographic generation
//! - [`config`]: explicit configuration with startup validation

pub mod ai;
pub mod analyzer;
pub mod config;
pub mod constants;
pub mod export;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, LlmConfig, ReportConfig};

// Error Types
pub use types::error::{EthoscanError, Result};

// Domain Types
pub use types::{
    AnalysisInput, AnalysisOutcome, ConcernLevel, MediaSource, Report, ThematicItem,
    TranslatedItem, TranslatedOverlay,
};

// =============================================================================
// Orchestrator Re-exports
// =============================================================================

pub use analyzer::{
    Analyzer, RemoteTranscriber, ResolvedTranscript, TranscriptResolver, TranscriptStore,
    extract_video_id,
};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    AnalysisMode,
    AnalysisRequest,
    // Provider
    GeminiProvider,
    LlmProvider,
    SharedProvider,
    create_provider,
    // Validation
    parse_report,
    parse_translation,
    validate_svg,
};

// =============================================================================
// Export Re-exports
// =============================================================================

pub use export::{DocumentRenderer, MarkdownRenderer, format_report, generate_infographic};
