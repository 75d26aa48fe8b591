//! Markdown Report Renderer
//!
//! Renders a finished report as a readable markdown document: the concrete
//! implementation of the document-export seam.

use super::DocumentRenderer;
use crate::types::{Report, Result};

/// Renders reports as UTF-8 markdown bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        Ok(format_report(report).into_bytes())
    }
}

/// Format a report as human-readable markdown
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Ethical Analysis Report\n\n");
    output.push_str(&format!("**Analyzed content:** {}\n\n", report.title));
    output.push_str(&format!(
        "**Overall concern level:** {}\n\n",
        report.overall_concern_level
    ));

    // Summary
    output.push_str("## Overall Summary\n\n");
    output.push_str(&report.overall_summary);
    output.push_str("\n\n");

    // Thematic analysis
    output.push_str("## Detailed Thematic Analysis\n\n");
    if report.thematic_analysis.is_empty() {
        output.push_str("No thematic analysis was provided.\n\n");
    } else {
        for item in &report.thematic_analysis {
            output.push_str(&format!(
                "### {} ({})\n\n",
                item.theme, item.concern_level
            ));
            output.push_str(&item.analysis);
            output.push_str("\n\n");
        }
    }

    // Positive aspects
    output.push_str("## Positive Aspects\n\n");
    output.push_str(&report.positive_aspects_summary);
    output.push_str("\n\n");

    // Concluding remarks
    output.push_str("## Concluding Remarks\n\n");
    output.push_str(&report.concluding_remarks);
    output.push('\n');

    // Reference line, only when provenance was stamped
    if let (Some(source), Some(date)) = (&report.source, &report.analysis_date) {
        output.push_str(&format!(
            "\n---\n\nEthical analysis of '{}', generated on {}.\n",
            source, date
        ));
    }

    output
}
