//! File export of timing data.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TimerError;
use crate::statistics::TimingSummary;

use super::terminal::format_summary;

/// Write the summary block and raw samples to a file.
///
/// The file starts with the two summary lines produced by
/// [`format_summary`], followed by one line with every raw sample in
/// recorded order, comma-separated, as unscaled nanosecond values. An
/// existing file at `path` is truncated without confirmation.
///
/// The handle is scoped to this function, so it is released on every exit
/// path. Open failures return [`TimerError::SinkOpen`] before anything is
/// written; zero samples return [`TimerError::NoSamples`] before the file
/// is even created.
pub fn save_timing_data(name: &str, samples: &[f64], path: &Path) -> Result<(), TimerError> {
    let summary = TimingSummary::from_samples(samples).ok_or_else(|| TimerError::NoSamples {
        timer: name.to_string(),
    })?;

    let file = File::create(path).map_err(|source| TimerError::SinkOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(format_summary(name, &summary).as_bytes())
        .map_err(|source| TimerError::SinkWrite { source })?;

    let raw_line = samples
        .iter()
        .map(|sample| sample.to_string())
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", raw_line).map_err(|source| TimerError::SinkWrite { source })?;

    writer
        .flush()
        .map_err(|source| TimerError::SinkWrite { source })?;

    tracing::debug!(
        "saved {} samples for timer '{}' to {}",
        samples.len(),
        name,
        path.display()
    );

    Ok(())
}
