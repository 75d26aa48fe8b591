//! SVG Markup Validation
//!
//! The infographic path asks the model for raw SVG markup. The reply is
//! accepted only when a complete `<svg ...>...</svg>` document can be
//! isolated; anything else is an `InvalidGraphic` failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{EthoscanError, Result};

/// Matches a complete SVG document, tolerating surrounding prose or fences.
static SVG_DOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg.*</svg>").expect("static regex"));

/// Validate raw model output as a self-contained SVG document.
pub fn validate_svg(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    let candidate = SVG_DOC
        .find(trimmed)
        .map(|m| m.as_str())
        .unwrap_or(trimmed);

    if candidate.starts_with("<svg") && candidate.ends_with("</svg>") {
        Ok(candidate.to_string())
    } else {
        Err(EthoscanError::InvalidGraphic(format!(
            "reply does not contain an SVG document (preview: {}...)",
            trimmed.chars().take(80).collect::<String>()
        )))
    }
}
