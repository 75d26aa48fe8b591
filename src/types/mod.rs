//! Core Domain Types
//!
//! The report entity produced by an analysis, the inputs that start one, and
//! the tagged outcome the orchestrator returns.
//!
//! A [`Report`] is either complete (every required field populated) or it was
//! rejected outright during validation; there is no partially-valid report.
//! Once constructed it is mutated only to attach provenance metadata or a
//! [`TranslatedOverlay`].

pub mod error;

pub use error::{EthoscanError, Result};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::report::MAX_CONCERN_LEVEL;

// =============================================================================
// Concern Level
// =============================================================================

/// Model-assigned severity percentage, always an integer in `[0, 100]`.
///
/// The bound is enforced at construction so a report holding a
/// `ConcernLevel` can never carry an out-of-range score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ConcernLevel(u8);

impl ConcernLevel {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(MAX_CONCERN_LEVEL);

    /// Create a concern level, rejecting values above 100.
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_CONCERN_LEVEL).then_some(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ConcernLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for ConcernLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("concern level {} out of range [0, 100]", value))
    }
}

impl From<ConcernLevel> for u8 {
    fn from(level: ConcernLevel) -> Self {
        level.0
    }
}

// =============================================================================
// Report
// =============================================================================

/// A single concern theme with its detailed analysis and severity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThematicItem {
    pub theme: String,
    pub analysis: String,
    pub concern_level: ConcernLevel,
}

/// The central analysis entity.
///
/// `source` and `analysis_date` are provenance metadata set by the
/// orchestrator after a successful result, never by the model. `translated`
/// is present only after a translation request succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub title: String,
    pub overall_summary: String,
    pub overall_concern_level: ConcernLevel,
    /// Insertion order is presentation order. May be empty: an empty sequence
    /// is how a degenerate (no-information) report is shaped.
    pub thematic_analysis: Vec<ThematicItem>,
    pub positive_aspects_summary: String,
    pub concluding_remarks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated: Option<TranslatedOverlay>,
}

impl Report {
    /// Attach a translation overlay so a view can toggle language without
    /// re-running the analysis. Leaves every original-language field and all
    /// numeric fields untouched.
    pub fn attach_translation(&mut self, overlay: TranslatedOverlay) {
        self.translated = Some(overlay);
    }

    pub fn has_translation(&self) -> bool {
        self.translated.is_some()
    }
}

// =============================================================================
// Translation Overlay
// =============================================================================

/// Translated counterpart of one thematic analysis entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedItem {
    pub analysis: String,
}

/// Translated free-text fields of a report, positionally aligned with the
/// base report's `thematic_analysis`. Alignment is validated at parse time;
/// a length mismatch never reaches this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedOverlay {
    pub overall_summary: String,
    pub concluding_remarks: String,
    pub thematic_analysis: Vec<TranslatedItem>,
}

// =============================================================================
// Analysis Input
// =============================================================================

/// An uploaded audio or video file to transcribe and analyze.
#[derive(Clone)]
pub struct MediaSource {
    /// Original file name; becomes the report's `source`.
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSource")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// What the caller supplied for one analysis request. Exactly one kind per
/// request.
#[derive(Debug, Clone)]
pub enum AnalysisInput {
    /// A movie or series title the model researches itself.
    Title(String),
    /// A platform video URL to resolve into a transcript.
    Url(String),
    /// An uploaded media file to transcribe.
    File(MediaSource),
}

impl AnalysisInput {
    /// The provenance string stamped on the finished report.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Title(title) => title,
            Self::Url(url) => url,
            Self::File(media) => &media.name,
        }
    }
}

// =============================================================================
// Analysis Outcome
// =============================================================================

/// Result of one analysis request.
///
/// The unknown-subject condition is a recoverable outcome, not an error:
/// callers keep their input form open and steer the user toward the
/// transcript-based path using `suggestion`.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// A genuine report, finalized with provenance metadata.
    Analyzed(Report),
    /// Title mode found no reliable information for the subject.
    SubjectUnknown { suggestion: String },
}

impl AnalysisOutcome {
    /// The report, if one was produced.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Analyzed(report) => Some(report),
            Self::SubjectUnknown { .. } => None,
        }
    }
}
