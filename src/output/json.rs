//! JSON serialization for timing reports.

use crate::statistics::TimingReport;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `TimingReport`).
pub fn to_json(report: &TimingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `TimingReport`).
pub fn to_json_pretty(report: &TimingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
