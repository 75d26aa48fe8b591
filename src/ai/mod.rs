//! AI Integration Layer
//!
//! The response-contract boundary with the LLM collaborator: prompt
//! construction, the schemas requested from the model, the provider that
//! executes requests, and the validation that turns raw replies into typed
//! reports.

pub mod prompt;
pub mod provider;
pub mod schema;
pub mod validation;

pub use prompt::{AnalysisMode, PromptBuilder, PromptSection};
pub use provider::{AnalysisRequest, GeminiProvider, LlmProvider, SharedProvider, create_provider};
pub use validation::{extract_json, parse_report, parse_translation, validate_svg};
