//! JSON Extraction
//!
//! Strips the incidental formatting models wrap around JSON replies (a
//! surrounding markdown code fence, a BOM) and parses what remains. There is
//! deliberately no repair beyond that: a reply that does not parse after
//! fence stripping is a malformed response, not something to patch up.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{EthoscanError, Result};

/// Matches a ``` or ```json fenced block anywhere in the reply.
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("static regex"));

/// Extract and parse the JSON payload of an LLM reply.
pub fn extract_json(raw: &str) -> Result<Value> {
    let trimmed = raw.trim().trim_start_matches('\u{feff}');

    let candidate = CODE_FENCE
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map(|fenced| fenced.as_str())
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(candidate).map_err(|e| {
        EthoscanError::malformed(format!(
            "no JSON object could be extracted: {} (content preview: {}...)",
            e,
            candidate.chars().take(120).collect::<String>()
        ))
    })
}
