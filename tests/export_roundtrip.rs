//! File export tests: format, overwrite semantics, round-trip fidelity,
//! and the hardened error paths.

use std::fs;

use stint::{IntervalTimer, TimerError};

fn timer_with(samples: &[f64]) -> IntervalTimer {
    let mut timer = IntervalTimer::new("export");
    for &ns in samples {
        timer.record_ns(ns);
    }
    timer
}

// ============================================================================
// File layout
// ============================================================================

#[test]
fn saved_file_has_summary_then_raw_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timing.csv");

    let timer = timer_with(&[100.0, 200.0, 300.0]);
    timer.save_timing_data(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Timer name: export");
    assert!(lines[1].starts_with("  Number of trials: 3, "));
    assert_eq!(lines[2], "100,200,300");
}

#[test]
fn summary_header_matches_report_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timing.csv");

    let timer = timer_with(&[500.0, 1500.0, 2500.0]);
    timer.save_timing_data(&path).unwrap();

    let mut sink = Vec::new();
    timer.report_stats(&mut sink).unwrap();
    let block = String::from_utf8(sink).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(&block));
}

#[test]
fn existing_file_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timing.csv");
    fs::write(&path, "stale content that is much longer than the new data\n".repeat(50)).unwrap();

    let timer = timer_with(&[100.0]);
    timer.save_timing_data(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Timer name: export\n"));
    assert!(!contents.contains("stale content"));
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn raw_sample_line_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timing.csv");

    // Fractional and large values: Display for f64 is shortest-round-trip,
    // so parsing the line back must reconstruct the samples bit-for-bit.
    let samples = [100.0, 33.333333333333336, 0.5, 2.5e6, 1234567.875];
    let timer = timer_with(&samples);
    timer.save_timing_data(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let raw_line = contents.lines().nth(2).unwrap();
    let parsed: Vec<f64> = raw_line
        .split(',')
        .map(|field| field.parse().unwrap())
        .collect();

    assert_eq!(parsed, samples);
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn export_with_no_samples_is_an_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.csv");

    let timer = IntervalTimer::new("empty");
    let result = timer.save_timing_data(&path);
    assert!(matches!(result, Err(TimerError::NoSamples { .. })));
    assert!(!path.exists());
}

#[test]
fn unopenable_path_is_sink_open_with_source() {
    use std::error::Error;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("timing.csv");

    let timer = timer_with(&[1.0, 2.0]);
    let err = timer.save_timing_data(&path).unwrap_err();

    match &err {
        TimerError::SinkOpen { path: reported, .. } => {
            assert_eq!(reported, &path);
        }
        other => panic!("expected SinkOpen, got {:?}", other),
    }
    // The OS error description is preserved for the caller.
    assert!(err.source().is_some());
}
