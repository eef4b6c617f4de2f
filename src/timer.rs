//! Interval capture over the platform monotonic clock.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use crate::error::TimerError;
use crate::output;
use crate::statistics::{TimingReport, TimingSummary};

/// Records elapsed durations between paired `start`/`stop` calls.
///
/// Call [`start`](IntervalTimer::start) and [`stop`](IntervalTimer::stop)
/// around each region of interest; every completed pair appends one
/// nanosecond-resolution sample. Statistics over the accumulated samples are
/// available through [`summary`](IntervalTimer::summary), and the summary
/// plus raw samples can be written to a file with
/// [`save_timing_data`](IntervalTimer::save_timing_data), which overwrites
/// any existing file without asking.
///
/// Durations come from [`Instant`], so they are monotonic and unaffected by
/// wall-clock adjustments, and every recorded sample is non-negative.
///
/// All mutation goes through `&mut self`; sharing a timer across threads
/// requires external synchronization, and the measured regions themselves
/// are assumed to run on one logical thread of control.
#[derive(Debug)]
pub struct IntervalTimer {
    name: String,
    pending_start: Option<Instant>,
    samples: Vec<f64>,
}

impl IntervalTimer {
    /// Create a timer with the given identifying name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pending_start: None,
            samples: Vec::new(),
        }
    }

    /// The name set at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a `start` is currently unmatched by a `stop`.
    pub fn is_running(&self) -> bool {
        self.pending_start.is_some()
    }

    /// Recorded samples in nanoseconds, in call order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of completed start/stop pairs.
    pub fn trial_count(&self) -> usize {
        self.samples.len()
    }

    /// Begin an interval.
    ///
    /// Safe to call in any state. If an interval is already open, the
    /// pending start is left untouched so the original interval is
    /// preserved rather than silently restarted; a warning is logged and
    /// nothing else happens.
    pub fn start(&mut self) {
        if self.pending_start.is_some() {
            tracing::warn!("timer '{}' is already active; ignoring start", self.name);
            return;
        }
        self.pending_start = Some(Instant::now());
    }

    /// End the open interval and record its duration.
    ///
    /// Returns the recorded duration in nanoseconds. Calling `stop` without
    /// a matching `start` yields [`TimerError::NotRunning`] and records
    /// nothing.
    pub fn stop(&mut self) -> Result<f64, TimerError> {
        let begin = self.pending_start.take().ok_or_else(|| TimerError::NotRunning {
            timer: self.name.clone(),
        })?;
        let elapsed_ns = begin.elapsed().as_nanos() as f64;
        self.samples.push(elapsed_ns);
        Ok(elapsed_ns)
    }

    /// Time a closure and record the elapsed duration as one sample.
    ///
    /// Uses its own start/end instants, so it neither requires nor disturbs
    /// an interval opened with [`start`](IntervalTimer::start). Returns the
    /// closure's value together with the recorded nanoseconds.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> (T, f64) {
        let begin = Instant::now();
        let value = f();
        let elapsed_ns = begin.elapsed().as_nanos() as f64;
        self.samples.push(elapsed_ns);
        (value, elapsed_ns)
    }

    /// Append a pre-measured sample directly, in nanoseconds.
    ///
    /// For callers that measure externally, and for driving the statistics
    /// with fixed values.
    pub fn record_ns(&mut self, ns: f64) {
        self.samples.push(ns);
    }

    /// Compute aggregate statistics over the recorded samples.
    ///
    /// Yields [`TimerError::NoSamples`] before the first completed pair.
    pub fn summary(&self) -> Result<TimingSummary, TimerError> {
        TimingSummary::from_samples(&self.samples).ok_or_else(|| TimerError::NoSamples {
            timer: self.name.clone(),
        })
    }

    /// Bundle the summary with the timer name for serialization.
    pub fn to_report(&self) -> Result<TimingReport, TimerError> {
        Ok(TimingReport {
            name: self.name.clone(),
            summary: self.summary()?,
        })
    }

    /// Write the fixed-label summary block to an arbitrary sink.
    ///
    /// The block is two lines: the timer name, then trial count and each
    /// statistic rescaled independently to its most readable unit.
    pub fn report_stats<W: Write>(&self, sink: &mut W) -> Result<(), TimerError> {
        let summary = self.summary()?;
        let block = output::format_summary(&self.name, &summary);
        sink.write_all(block.as_bytes())
            .map_err(|source| TimerError::SinkWrite { source })
    }

    /// Write the summary block to standard output.
    pub fn report(&self) -> Result<(), TimerError> {
        self.report_stats(&mut io::stdout())
    }

    /// Print an ANSI-styled summary to standard output.
    ///
    /// Same fields as [`report`](IntervalTimer::report), with emphasis for
    /// interactive terminals.
    pub fn report_styled(&self) -> Result<(), TimerError> {
        let summary = self.summary()?;
        print!("{}", output::format_summary_styled(&self.name, &summary));
        Ok(())
    }

    /// Save the summary block and raw samples to a file.
    ///
    /// Truncates any existing file at `path` without confirmation. The file
    /// holds the two summary lines followed by one line with every raw
    /// sample in recorded order, comma-separated, in unscaled nanoseconds.
    /// On open failure nothing is written and the OS error is surfaced in
    /// [`TimerError::SinkOpen`].
    pub fn save_timing_data(&self, path: impl AsRef<Path>) -> Result<(), TimerError> {
        output::save_timing_data(&self.name, &self.samples, path.as_ref())
    }
}
