//! Terminal output formatting for timing summaries.

use colored::Colorize;

use crate::statistics::TimingSummary;
use crate::units::scale_ns;

/// Format the fixed-label summary block.
///
/// Two lines: the timer name, then the statistics with each value rescaled
/// independently to its most readable unit. This exact layout is shared by
/// stdout reporting and the file export header.
pub fn format_summary(name: &str, summary: &TimingSummary) -> String {
    format!(
        "Timer name: {}\n  \
         Number of trials: {}, \
         Total time: {}, \
         Average Time: {}, \
         Standard Deviation: {}, \
         Fastest Run: {}, \
         Slowest Run: {}\n",
        name,
        summary.count,
        scale_ns(summary.total_ns),
        scale_ns(summary.mean_ns),
        scale_ns(summary.std_dev_ns),
        scale_ns(summary.min_ns),
        scale_ns(summary.max_ns),
    )
}

/// Format the summary with ANSI emphasis for interactive terminals.
///
/// Same fields as [`format_summary`]: the name is bold, the fastest run is
/// green and the slowest red.
pub fn format_summary_styled(name: &str, summary: &TimingSummary) -> String {
    format!(
        "Timer name: {}\n  \
         Number of trials: {}, \
         Total time: {}, \
         Average Time: {}, \
         Standard Deviation: {}, \
         Fastest Run: {}, \
         Slowest Run: {}\n",
        name.bold(),
        summary.count,
        scale_ns(summary.total_ns),
        scale_ns(summary.mean_ns),
        scale_ns(summary.std_dev_ns),
        scale_ns(summary.min_ns).to_string().green(),
        scale_ns(summary.max_ns).to_string().red(),
    )
}
