//! Response Validation
//!
//! Turns a raw LLM reply into a typed [`Report`] or [`TranslatedOverlay`].
//! Validation is all-or-nothing: every required field must be present with
//! the right type (and non-empty where the contract says so), or the whole
//! reply is rejected with `MalformedResponse`. A failing report is never
//! returned partially populated.

use serde_json::{Map, Value};

use super::json::extract_json;
use crate::types::{
    ConcernLevel, EthoscanError, Report, Result, ThematicItem, TranslatedItem, TranslatedOverlay,
};

/// Parse and validate a full analysis report.
///
/// Degenerate (sentinel-summary) reports pass validation here; classifying
/// them is the orchestrator's job.
pub fn parse_report(raw: &str) -> Result<Report> {
    let value = extract_json(raw)?;
    let obj = as_object(&value)?;

    let title = require_non_empty(obj, "title")?;
    let overall_summary = require_string(obj, "overallSummary")?;
    let overall_concern_level = require_concern_level(obj, "overallConcernLevel")?;

    let mut thematic_analysis = Vec::new();
    for (idx, entry) in require_array(obj, "thematicAnalysis")?.iter().enumerate() {
        let location = format!("thematicAnalysis[{}]", idx);
        let item = entry
            .as_object()
            .ok_or_else(|| EthoscanError::malformed(format!("'{}' is not an object", location)))?;

        thematic_analysis.push(ThematicItem {
            theme: require_non_empty(item, "theme")
                .map_err(|e| at_location(e, &location))?,
            analysis: require_non_empty(item, "analysis")
                .map_err(|e| at_location(e, &location))?,
            concern_level: require_concern_level(item, "concernLevel")
                .map_err(|e| at_location(e, &location))?,
        });
    }

    let positive_aspects_summary = require_string(obj, "positiveAspectsSummary")?;
    let concluding_remarks = require_string(obj, "concludingRemarks")?;

    Ok(Report {
        title,
        overall_summary,
        overall_concern_level,
        thematic_analysis,
        positive_aspects_summary,
        concluding_remarks,
        source: None,
        analysis_date: None,
        translated: None,
    })
}

/// Parse and validate a translation reply against the base report's thematic
/// item count. A length mismatch is a malformed response, not something to
/// zip-and-truncate silently.
pub fn parse_translation(raw: &str, expected_items: usize) -> Result<TranslatedOverlay> {
    let value = extract_json(raw)?;
    let obj = as_object(&value)?;

    let overall_summary = require_string(obj, "overallSummary")?;
    let concluding_remarks = require_string(obj, "concludingRemarks")?;

    let entries = require_array(obj, "thematicAnalysis")?;
    if entries.len() != expected_items {
        return Err(EthoscanError::malformed(format!(
            "translated thematicAnalysis has {} items, expected {}",
            entries.len(),
            expected_items
        )));
    }

    let mut thematic_analysis = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let location = format!("thematicAnalysis[{}]", idx);
        let item = entry
            .as_object()
            .ok_or_else(|| EthoscanError::malformed(format!("'{}' is not an object", location)))?;

        thematic_analysis.push(TranslatedItem {
            analysis: require_string(item, "analysis")
                .map_err(|e| at_location(e, &location))?,
        });
    }

    Ok(TranslatedOverlay {
        overall_summary,
        concluding_remarks,
        thematic_analysis,
    })
}

// =============================================================================
// Field Helpers
// =============================================================================

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| EthoscanError::malformed("response must be a JSON object"))
}

fn require_string(obj: &Map<String, Value>, field: &str) -> Result<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(EthoscanError::malformed(format!(
            "'{}' must be a string",
            field
        ))),
        None => Err(EthoscanError::malformed(format!(
            "missing required field '{}'",
            field
        ))),
    }
}

fn require_array<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Vec<Value>> {
    match obj.get(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(EthoscanError::malformed(format!(
            "'{}' must be an array",
            field
        ))),
        None => Err(EthoscanError::malformed(format!(
            "missing required field '{}'",
            field
        ))),
    }
}

fn require_non_empty(obj: &Map<String, Value>, field: &str) -> Result<String> {
    let value = require_string(obj, field)?;
    if value.trim().is_empty() {
        return Err(EthoscanError::malformed(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(value)
}

fn require_concern_level(obj: &Map<String, Value>, field: &str) -> Result<ConcernLevel> {
    let number = match obj.get(field) {
        Some(value) if value.is_i64() || value.is_u64() => value.as_i64(),
        Some(_) => None,
        None => {
            return Err(EthoscanError::malformed(format!(
                "missing required field '{}'",
                field
            )));
        }
    };

    number
        .and_then(|n| u8::try_from(n).ok())
        .and_then(ConcernLevel::new)
        .ok_or_else(|| {
            EthoscanError::malformed(format!("'{}' must be an integer in [0, 100]", field))
        })
}

fn at_location(err: EthoscanError, location: &str) -> EthoscanError {
    match err {
        EthoscanError::MalformedResponse(msg) => {
            EthoscanError::malformed(format!("{}: {}", location, msg))
        }
        other => other,
    }
}
