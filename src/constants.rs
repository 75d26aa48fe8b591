//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Report contract constants
pub mod report {
    /// Exact `overallSummary` value the model must emit when it cannot find
    /// reliable information for a title. Compared verbatim by the orchestrator;
    /// never exposed to presentation code.
    pub const UNKNOWN_SUBJECT_SENTINEL: &str =
        "No conclusive information was found for the provided title.";

    /// Placeholder the model is told to use for free-text fields of a
    /// degenerate (no-information) report.
    pub const NOT_APPLICABLE_PLACEHOLDER: &str = "Not applicable due to lack of information.";

    /// Upper bound (inclusive) for concern-level percentages.
    pub const MAX_CONCERN_LEVEL: u8 = 100;

    /// Default output language for generated reports.
    pub const DEFAULT_LANGUAGE: &str = "Spanish";

    /// Default target language for the translation overlay.
    pub const DEFAULT_TRANSLATION_LANGUAGE: &str = "English";

    /// Date format stamped on finalized reports.
    pub const ANALYSIS_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Generation temperatures per request kind
pub mod temperature {
    /// Title research needs some latitude for recall across sources.
    pub const TITLE_ANALYSIS: f32 = 0.3;

    /// Transcript analysis works from supplied text only.
    pub const TRANSCRIPT_ANALYSIS: f32 = 0.5;

    /// Translations must track the source text closely.
    pub const TRANSLATION: f32 = 0.2;

    /// Infographic markup must follow the design brief exactly.
    pub const INFOGRAPHIC: f32 = 0.1;
}

/// Infographic layout constants
pub mod infographic {
    /// SVG viewport width in user units.
    pub const VIEWBOX_WIDTH: u32 = 800;

    /// SVG viewport height in user units.
    pub const VIEWBOX_HEIGHT: u32 = 600;

    /// Maximum thematic items rendered before the layout overflows.
    pub const MAX_THEMES: usize = 5;
}

/// Video URL constants
pub mod video {
    /// Length of a platform video identifier.
    pub const VIDEO_ID_LEN: usize = 11;
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Default API base for the Gemini provider
    pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Default generation model
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
}
