//! JSON estimate reports
//!
//! The serialized `EmissionsResult`: unrounded total, per-category kg,
//! rating band with its ordinal and text, and the ordered suggestion blocks.

use crate::estimator::EmissionsResult;

pub struct JsonFormatter;

impl JsonFormatter {
    /// Indented report, as written by the CLI
    pub fn format(result: &EmissionsResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    /// Single-line report for piping or batch output
    pub fn format_compact(result: &EmissionsResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(result)
    }
}
