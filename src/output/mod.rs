//! Output formatting for timing summaries.
//!
//! This module provides writers for the supported formats:
//! - Terminal: fixed-label summary block, plain or ANSI-styled
//! - File: summary block plus raw comma-separated samples
//! - JSON: machine-readable serialization

mod file;
mod json;
mod terminal;

pub use file::save_timing_data;
pub use json::{to_json, to_json_pretty};
pub use terminal::{format_summary, format_summary_styled};
