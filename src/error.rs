//! Error types for timer operations.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while operating an interval timer.
///
/// Every variant is a local, recoverable condition reported to the
/// immediate caller. None of them aborts the process, and none has
/// transient-failure semantics that would warrant a retry.
#[derive(Debug)]
pub enum TimerError {
    /// `stop()` was called without a matching `start()`.
    NotRunning {
        /// Name of the timer the call was made on.
        timer: String,
    },

    /// Statistics or export were requested before any interval completed.
    NoSamples {
        /// Name of the timer the call was made on.
        timer: String,
    },

    /// The output path could not be opened for writing.
    ///
    /// Nothing has been written when this is returned.
    SinkOpen {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error from the OS.
        source: io::Error,
    },

    /// A write to an already-open sink failed.
    SinkWrite {
        /// Underlying I/O error from the OS.
        source: io::Error,
    },
}

impl std::fmt::Display for TimerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerError::NotRunning { timer } => {
                write!(
                    f,
                    "timer '{}' is not running; stop() requires a matching start()",
                    timer
                )
            }
            TimerError::NoSamples { timer } => {
                write!(f, "timer '{}' has no recorded samples", timer)
            }
            TimerError::SinkOpen { path, source } => {
                write!(
                    f,
                    "failed to open '{}' for writing: {}",
                    path.display(),
                    source
                )
            }
            TimerError::SinkWrite { source } => {
                write!(f, "failed to write timing data: {}", source)
            }
        }
    }
}

impl std::error::Error for TimerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimerError::SinkOpen { source, .. } | TimerError::SinkWrite { source } => Some(source),
            _ => None,
        }
    }
}
