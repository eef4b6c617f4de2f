//! Descriptive statistics over recorded interval samples.
//!
//! Statistics are computed from raw nanosecond samples, separately from the
//! collection machinery, so they can be tested against fixed inputs.

use serde::{Deserialize, Serialize};

/// Aggregate statistics for a set of interval samples.
///
/// All durations are in nanoseconds; rescaling to display units happens at
/// output time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Number of completed start/stop pairs.
    pub count: usize,
    /// Sum of all samples.
    pub total_ns: f64,
    /// Arithmetic mean.
    pub mean_ns: f64,
    /// Population standard deviation (divisor = count, not count − 1).
    pub std_dev_ns: f64,
    /// Fastest recorded interval.
    pub min_ns: f64,
    /// Slowest recorded interval.
    pub max_ns: f64,
}

impl TimingSummary {
    /// Compute a summary from raw nanosecond samples.
    ///
    /// Returns `None` for an empty slice; there is no meaningful summary of
    /// zero samples and the divisions below would be undefined.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let total: f64 = samples.iter().sum();
        let mean = total / count as f64;

        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &sample in samples {
            min = min.min(sample);
            max = max.max(sample);
        }

        Some(Self {
            count,
            total_ns: total,
            mean_ns: mean,
            std_dev_ns: variance.sqrt(),
            min_ns: min,
            max_ns: max,
        })
    }
}

/// A named summary, the unit of machine-readable export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    /// Name of the timer the summary was computed from.
    pub name: String,
    /// The computed statistics.
    pub summary: TimingSummary,
}
