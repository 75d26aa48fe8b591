//! Report Export
//!
//! The outward-facing side of a finished report: the document-renderer
//! collaborator seam with its markdown implementation, and the LLM-generated
//! SVG infographic path.

mod infographic;
mod markdown;

pub use infographic::generate_infographic;
pub use markdown::{MarkdownRenderer, format_report};

use crate::types::{Report, Result};

/// Document-export collaborator: turns a finished report into a binary
/// document (markdown, DOCX, PDF, ...). Implementations surface failures as
/// `ExportFailed`.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, report: &Report) -> Result<Vec<u8>>;
}
