//! AI Response Validation
//!
//! The inbound half of the response contract: JSON extraction (code-fence
//! stripping only, no lenient repair), strict all-or-nothing report and
//! translation validation, and SVG markup validation for the infographic
//! path.

mod json;
mod response;
mod svg;

pub use json::extract_json;
pub use response::{parse_report, parse_translation};
pub use svg::validate_svg;
