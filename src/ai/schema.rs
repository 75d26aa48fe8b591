//! Report Response Schemas
//!
//! The canonical output shapes requested from the LLM, passed verbatim to the
//! provider as a structured-output schema. The provider is expected, not
//! guaranteed, to conform; the validation layer enforces the contract on the
//! way back in.
//!
//! One schema variant exists: the extended report (overall and per-theme
//! concern levels plus a positive-aspects summary). Earlier minimal drafts are
//! deliberately not represented.

use serde_json::{Value, json};

use crate::constants::report::UNKNOWN_SUBJECT_SENTINEL;

/// Schema for a full analysis report.
pub fn report_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The title of the film, series, or source video/document under analysis."
            },
            "overallSummary": {
                "type": "STRING",
                "description": format!(
                    "A one-paragraph executive summary of the content's overall ethical landscape. \
                     If no information is found for the title, this field must contain exactly the \
                     text '{}'.",
                    UNKNOWN_SUBJECT_SENTINEL
                )
            },
            "overallConcernLevel": {
                "type": "INTEGER",
                "description": "Aggregate ethical-concern assessment as a percentage from 0 (no concern) to 100 (maximum concern)."
            },
            "thematicAnalysis": {
                "type": "ARRAY",
                "description": "Detailed analyses for each theme of ethical concern. Do not include positive themes here. If no information was found for the title, this must be an empty array.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "theme": {
                            "type": "STRING",
                            "description": "Name of the ethical-concern theme under analysis (e.g. 'Language and Communication', 'Representation and Discrimination')."
                        },
                        "analysis": {
                            "type": "STRING",
                            "description": "A detailed, multi-sentence analysis for this specific concern theme."
                        },
                        "concernLevel": {
                            "type": "INTEGER",
                            "description": "Ethical-concern assessment for this specific theme, as a percentage from 0 (no concern) to 100 (maximum concern)."
                        }
                    },
                    "required": ["theme", "analysis", "concernLevel"]
                }
            },
            "positiveAspectsSummary": {
                "type": "STRING",
                "description": "A one-paragraph summary of positive ethical aspects, prosocial messages, or constructive values identified in the content. If there are none, state that no notable positive aspects were found."
            },
            "concludingRemarks": {
                "type": "STRING",
                "description": "Closing reflections summarizing the main ethical strengths and weaknesses, with an overall assessment."
            }
        },
        "required": [
            "title",
            "overallSummary",
            "overallConcernLevel",
            "thematicAnalysis",
            "positiveAspectsSummary",
            "concludingRemarks"
        ]
    })
}

/// Schema for a parallel-structure translation of a report's free-text
/// fields. `item_count` pins the translated thematic sequence to the base
/// report's length so positional alignment is part of the requested shape.
pub fn translation_schema(item_count: usize) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallSummary": {
                "type": "STRING",
                "description": "Translation of the report's overall summary."
            },
            "concludingRemarks": {
                "type": "STRING",
                "description": "Translation of the report's concluding remarks."
            },
            "thematicAnalysis": {
                "type": "ARRAY",
                "description": "Translations of each thematic analysis, in the same order as the source report.",
                "minItems": item_count,
                "maxItems": item_count,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "analysis": {
                            "type": "STRING",
                            "description": "Translation of this theme's analysis text."
                        }
                    },
                    "required": ["analysis"]
                }
            }
        },
        "required": ["overallSummary", "concludingRemarks", "thematicAnalysis"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_schema_requires_every_field() {
        let schema = report_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        for field in [
            "title",
            "overallSummary",
            "overallConcernLevel",
            "thematicAnalysis",
            "positiveAspectsSummary",
            "concludingRemarks",
        ] {
            assert!(required.contains(&field), "missing required field {field}");
        }

        let item_required = &schema["properties"]["thematicAnalysis"]["items"]["required"];
        assert_eq!(item_required, &json!(["theme", "analysis", "concernLevel"]));
    }

    #[test]
    fn test_report_schema_embeds_sentinel() {
        let schema = report_schema();
        let description = schema["properties"]["overallSummary"]["description"]
            .as_str()
            .unwrap();
        assert!(description.contains(UNKNOWN_SUBJECT_SENTINEL));
    }

    #[test]
    fn test_schema_construction_is_pure() {
        assert_eq!(report_schema(), report_schema());
        assert_eq!(translation_schema(3), translation_schema(3));
    }

    #[test]
    fn test_translation_schema_pins_item_count() {
        let schema = translation_schema(4);
        let array = &schema["properties"]["thematicAnalysis"];
        assert_eq!(array["minItems"], 4);
        assert_eq!(array["maxItems"], 4);
    }
}
