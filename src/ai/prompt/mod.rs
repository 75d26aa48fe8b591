//! Prompt Builder System
//!
//! Standardized prompt construction for LLM interactions.
//! Provides consistent structure across every request the crate issues.
//!
//! ## Design Principles
//!
//! 1. **Role Definition**: Clear AI role for each task
//! 2. **Structured Objectives**: Numbered goals
//! 3. **Focus Enforcement**: Prevent topic drift
//! 4. **Output Schema**: JSON structure requested alongside the text
//!
//! Every constructor is a pure function of its inputs: the same mode and
//! subject always produce byte-identical instruction text and schema.

use serde_json::json;

use crate::ai::provider::AnalysisRequest;
use crate::ai::schema;
use crate::constants::{infographic, report, temperature};
use crate::types::Report;

// =============================================================================
// Prompt Builder
// =============================================================================

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Role definition with expertise area
    Role { expertise: String, task: String },
    /// Numbered objectives
    Objectives(Vec<String>),
    /// Raw text section with optional header
    Text {
        header: Option<String>,
        content: String,
    },
    /// Focus enforcement with restrictions
    Focus {
        target: String,
        restrictions: Vec<String>,
    },
    /// Custom section
    Custom(String),
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role definition section
    pub fn role(mut self, expertise: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            expertise: expertise.to_string(),
            task: task.to_string(),
        });
        self
    }

    /// Add objectives section
    pub fn objectives(mut self, objectives: Vec<&str>) -> Self {
        self.sections.push(PromptSection::Objectives(
            objectives.into_iter().map(String::from).collect(),
        ));
        self
    }

    /// Add text section
    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: None,
            content: content.to_string(),
        });
        self
    }

    /// Add text section with header
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: Some(header.to_string()),
            content: content.to_string(),
        });
        self
    }

    /// Add focus enforcement section
    pub fn focus(mut self, target: &str, restrictions: Vec<&str>) -> Self {
        self.sections.push(PromptSection::Focus {
            target: target.to_string(),
            restrictions: restrictions.into_iter().map(String::from).collect(),
        });
        self
    }

    /// Add custom section
    pub fn custom(mut self, content: &str) -> Self {
        self.sections
            .push(PromptSection::Custom(content.to_string()));
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Role { expertise, task } => {
                    prompt.push_str("<ROLE>\n");
                    prompt.push_str(&format!(
                        "You are an expert in {} specializing in {}.\n",
                        expertise, task
                    ));
                    prompt.push_str("</ROLE>\n\n");
                }
                PromptSection::Objectives(objectives) => {
                    prompt.push_str("<OBJECTIVES>\n");
                    for (i, obj) in objectives.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, obj));
                    }
                    prompt.push_str("</OBJECTIVES>\n\n");
                }
                PromptSection::Text { header, content } => {
                    if let Some(h) = header {
                        prompt.push_str(&format!("# {}\n\n", h));
                    }
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
                PromptSection::Focus {
                    target,
                    restrictions,
                } => {
                    prompt.push_str("<FOCUS>\n");
                    prompt.push_str(&format!("IMPORTANT: Focus EXCLUSIVELY on: {}\n", target));
                    for restriction in restrictions {
                        prompt.push_str(&format!("- {}\n", restriction));
                    }
                    prompt.push_str("</FOCUS>\n\n");
                }
                PromptSection::Custom(content) => {
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

// =============================================================================
// Analysis Prompts
// =============================================================================

/// How one analysis request reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode<'a> {
    /// Research the named film or series; the model works from its own
    /// knowledge and may conclude the subject is unknown.
    BySubjectTitle { title: &'a str },
    /// Analyze supplied transcript text directly, no research.
    FromTranscript {
        source_name: &'a str,
        transcript: &'a str,
    },
}

/// Instruction sent alongside an uploaded media file.
pub const MEDIA_TRANSCRIPTION_INSTRUCTION: &str = "Transcribe this audio file accurately. \
If the audio is unclear or contains no speech, return an empty response.";

/// Build the analysis request for a mode and output language.
pub fn analysis_request(mode: &AnalysisMode<'_>, language: &str) -> AnalysisRequest {
    match mode {
        AnalysisMode::BySubjectTitle { title } => AnalysisRequest {
            system_instruction: title_system_instruction(language),
            user_text: format!(
                "Please generate a thorough ethical analysis for the following series/film: \"{}\".",
                title
            ),
            schema: schema::report_schema(),
            temperature: temperature::TITLE_ANALYSIS,
        },
        AnalysisMode::FromTranscript {
            source_name,
            transcript,
        } => AnalysisRequest {
            system_instruction: transcript_system_instruction(language),
            user_text: format!(
                "The user supplied a transcript from the source: \"{}\". \
                 Please analyze the following content:\n\n---\n\n{}",
                source_name, transcript
            ),
            schema: schema::report_schema(),
            temperature: temperature::TRANSCRIPT_ANALYSIS,
        },
    }
}

fn title_system_instruction(language: &str) -> String {
    PromptBuilder::new()
        .role(
            "media ethics, sociology, and cultural studies",
            "the ethical analysis of films and television series",
        )
        .text(&format!(
            "Your task is to produce a thorough ethical analysis of a given film or \
             television series. The analysis must be complete, balanced, and consider \
             multiple points of view. All output text must be written in {}.",
            language
        ))
        .section(
            "If the title is unknown",
            &format!(
                "If you CANNOT find any conclusive or reliable information about the \
                 provided title, you MUST produce a report shaped exactly like this:\n\
                 - 'title': the title the user provided.\n\
                 - 'overallSummary': the exact text '{}' (verbatim, regardless of the \
                 output language).\n\
                 - 'overallConcernLevel': 0\n\
                 - 'thematicAnalysis': an empty array [].\n\
                 - 'positiveAspectsSummary': '{}'\n\
                 - 'concludingRemarks': '{}'",
                report::UNKNOWN_SUBJECT_SENTINEL,
                report::NOT_APPLICABLE_PLACEHOLDER,
                report::NOT_APPLICABLE_PLACEHOLDER
            ),
        )
        .section(
            "If information exists",
            "Analyze the title and produce a detailed report. Identify CONCERNS in \
             'thematicAnalysis' across the following key areas:",
        )
        .objectives(vec![
            "**Language and Communication**: Evaluate the dialogue. Is it respectful? \
             Does it contain excessive profanity, hate speech, or derogatory terms?",
            "**Behavioral Modeling and Attitudes**: Analyze the behaviors, values, and \
             attitudes the characters promote. Does the show glorify violence, substance \
             abuse, or other harmful behavior?",
            "**Socialization and Interpersonal Relationships**: Examine how relationships \
             are portrayed. Does the show model healthy conflict resolution?",
            "**Representation, Stereotypes, and Discrimination**: Evaluate the diversity \
             of characters. Does the show reinforce harmful stereotypes?",
            "**Suitability for the Target Audience**: Based on your analysis, discuss how \
             appropriate the series is for different age groups.",
        ])
        .text(
            "Separately, in 'positiveAspectsSummary', summarize any prosocial messages, \
             positive values, or ethical lessons the series may offer.",
        )
        .text(
            "Based on your complete analysis, assign an 'overallConcernLevel' as a \
             percentage (0-100). For each item in 'thematicAnalysis', assign a \
             'concernLevel' as a percentage (0-100). A higher percentage indicates a \
             higher level of ethical concern.",
        )
        .custom(
            "Your response MUST be a single raw JSON object conforming to the provided \
             schema. Do not add any text before or after the JSON object, and do not use \
             markdown formatting such as ```json.",
        )
        .build()
}

fn transcript_system_instruction(language: &str) -> String {
    PromptBuilder::new()
        .role(
            "media ethics and communication",
            "the ethical analysis of transcribed media content",
        )
        .text(&format!(
            "Your task is to produce a thorough ethical analysis of the provided \
             transcript. The analysis must be complete, balanced, and centered on the \
             text itself. All output text must be written in {}.",
            language
        ))
        .focus(
            "the supplied transcript text",
            vec![
                "Do NOT research the source beyond the transcript",
                "Do NOT speculate about scenes or context the text does not show",
            ],
        )
        .section(
            "Analysis areas",
            "Analyze the transcript and produce a detailed report. Identify CONCERNS in \
             'thematicAnalysis' across the following key areas:",
        )
        .objectives(vec![
            "**Language and Communication**: Evaluate the dialogue. Is it respectful? \
             Does it contain profanity, hate speech, or derogatory terms?",
            "**Behavioral Modeling and Attitudes**: Analyze the behaviors, values, and \
             attitudes promoted. Does the text describe or promote harmful behavior?",
            "**Socialization and Interpersonal Relationships**: Examine how relationships \
             are described through the dialogue.",
            "**Representation, Stereotypes, and Discrimination**: Evaluate how different \
             groups are portrayed. Does the text reinforce stereotypes?",
        ])
        .text(
            "Separately, in 'positiveAspectsSummary', summarize any prosocial messages, \
             positive values, or ethical lessons in the text.",
        )
        .text(
            "Based on your complete analysis, assign an 'overallConcernLevel' as a \
             percentage (0-100). For each item in 'thematicAnalysis', assign a \
             'concernLevel' as a percentage (0-100). A higher percentage indicates a \
             higher level of ethical concern.",
        )
        .custom(
            "Structure your findings strictly according to the provided JSON schema. The \
             'title' field in your response must be the source name supplied by the user.",
        )
        .build()
}

// =============================================================================
// Translation Prompt
// =============================================================================

/// Build the translation request for a report's free-text fields.
///
/// Only `overallSummary`, each thematic `analysis`, and `concludingRemarks`
/// travel to the model; numeric fields and theme names stay local.
pub fn translation_request(source: &Report, target_language: &str) -> AnalysisRequest {
    let payload = json!({
        "overallSummary": source.overall_summary,
        "concludingRemarks": source.concluding_remarks,
        "thematicAnalysis": source
            .thematic_analysis
            .iter()
            .map(|item| json!({"analysis": item.analysis}))
            .collect::<Vec<_>>(),
    });

    let system_instruction = PromptBuilder::new()
        .role("professional translation", "media analysis reports")
        .text(&format!(
            "Translate every text field of the provided report into {}. Preserve the \
             meaning, register, and tone of the source text.",
            target_language
        ))
        .custom(
            "The 'thematicAnalysis' array in your response MUST contain exactly one \
             entry per source entry, in the same order. Respond with a single raw JSON \
             object conforming to the provided schema; no markdown, no commentary.",
        )
        .build();

    AnalysisRequest {
        system_instruction,
        user_text: payload.to_string(),
        schema: schema::translation_schema(source.thematic_analysis.len()),
        temperature: temperature::TRANSLATION,
    }
}

// =============================================================================
// Infographic Prompt
// =============================================================================

/// Build the free-form prompt requesting a self-contained SVG infographic for
/// a report. At most [`infographic::MAX_THEMES`] thematic items are embedded
/// to keep the layout readable.
pub fn infographic_prompt(report: &Report) -> String {
    let theme_count = report.thematic_analysis.len().min(infographic::MAX_THEMES);
    let data = json!({
        "title": report.title,
        "overallConcernLevel": report.overall_concern_level.get(),
        "thematicAnalysis": &report.thematic_analysis[..theme_count],
    });

    PromptBuilder::new()
        .role(
            "data visualization and graphic design",
            "polished, legible SVG infographics",
        )
        .text(
            "Create a single, self-contained SVG infographic from the JSON data below. \
             The infographic language must match the language of the data.",
        )
        .section(
            "Design brief",
            &format!(
                "1. **Viewport**: exactly \"0 0 {w} {h}\".\n\
                 2. **Aesthetic**: elegant modern dark theme. Define a subtle radial \
                 background gradient in <defs> (stops #1e293b to #0f172a) applied to a \
                 full-size background <rect>. Clean sans-serif font. Primary text fill \
                 '#e2e8f0', secondary '#94a3b8'.\n\
                 3. **Accessibility**: include meaningful <title> and <desc> elements.\n\
                 4. **Header**: centered main title \"{title}\" near y=45 (28px bold, \
                 text-anchor middle, x={cx}), with a smaller subtitle beneath it at \
                 y=70 (16px, fill '#94a3b8').\n\
                 5. **Left column**: a gauge for the overall concern level built with \
                 the stroke-dasharray technique on two circles (r=100, cx=200, cy=250, \
                 stroke-width 25, background track '#334155', both rotated -90 degrees \
                 so 0% starts at the top). The progress stroke, the large centered \
                 percentage text (52px bold), and its label must use the dynamic color \
                 rule below.\n\
                 6. **Right column**: a \"thematic breakdown\" heading at y=140, then \
                 one group per theme (max {max} themes, ~75px vertical rhythm): theme \
                 name (15px, wrap to two lines with <tspan> when long), a 350px-wide \
                 rounded track rect ('#334155', height 18), a progress bar sized to the \
                 concernLevel percentage, and a right-aligned percentage label whose \
                 fill matches the bar.\n\
                 7. **Dynamic color rule**: 0-33 green '#22c55e', 34-66 yellow \
                 '#eab308', 67-100 red '#ef4444'.\n\
                 8. **Footer**: a small attribution line near y=580 (12px, fill \
                 '#475569', centered).",
                w = infographic::VIEWBOX_WIDTH,
                h = infographic::VIEWBOX_HEIGHT,
                cx = infographic::VIEWBOX_WIDTH / 2,
                title = report.title,
                max = infographic::MAX_THEMES,
            ),
        )
        .custom(
            "Respond ONLY with the raw, self-contained SVG code. No markdown fences, no \
             XML declaration, no comments, no explanatory text. The entire response MUST \
             start with `<svg` and end with `</svg>`.",
        )
        .section("Infographic data", &data.to_string())
        .build()
}
