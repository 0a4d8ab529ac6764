//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use resource_availability::{AvailabilitySummary, AvailabilityType, Interval, IntervalSeries};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed evaluation instant, in seconds, well after every fixture below.
pub const NOW_SECS: i64 = 1_000_000;

/// Instant `seconds` after the epoch.
pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(seconds * 1000).expect("timestamp in range")
}

/// The fixed evaluation instant.
pub fn now() -> DateTime<Utc> {
    at(NOW_SECS)
}

/// Seconds timestamp `seconds_ago` before [`NOW_SECS`].
pub fn past(seconds_ago: i64) -> i64 {
    NOW_SECS - seconds_ago
}

/// Build a contiguous series from `(state, start_secs)` transitions.
///
/// Each interval ends where the next one starts; the last stays open.
pub fn list(transitions: &[(AvailabilityType, i64)]) -> IntervalSeries {
    IntervalSeries::from_transitions(transitions.iter().map(|&(state, secs)| (state, at(secs))))
        .expect("fixture series must be valid")
}

/// Summarize a transition list at the fixed evaluation instant.
pub fn summarize(transitions: &[(AvailabilityType, i64)]) -> AvailabilitySummary {
    AvailabilitySummary::new(list(transitions), now())
}

/// A closed interval between two second offsets.
pub fn closed(state: AvailabilityType, start: i64, end: i64) -> Interval {
    Interval::closed(state, at(start), at(end))
}

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// The directory is returned so it lives as long as the test needs the file.
pub fn write_history(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create history file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write history file");
    (dir, path)
}
