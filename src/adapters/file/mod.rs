//! File-backed interval source.
//!
//! Reads a resource's availability history from a JSON or YAML document.
//! Two shapes are accepted:
//!
//! ```yaml
//! # bare list
//! - { state: up, start: 10000 }
//! - { state: down, start: 20000 }
//! ```
//!
//! ```yaml
//! # named resource
//! resource: db-primary
//! intervals:
//!   - { state: up, start: 10000, end: 20000 }
//!   - { state: down, start: 20000 }
//! ```
//!
//! Records without an `end` are closed at the next record's start, so a plain
//! list of state transitions is enough. Only the last record stays open.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::models::Interval;
use crate::domain::ports::{IntervalBatch, IntervalSource};

/// Serialization format of an interval file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalFileFormat {
    Json,
    Yaml,
}

impl IntervalFileFormat {
    /// Detect the format from the file extension; anything but
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IntervalDocument {
    Listed(Vec<Interval>),
    Named {
        #[serde(default)]
        resource: Option<String>,
        intervals: Vec<Interval>,
    },
}

impl From<IntervalDocument> for IntervalBatch {
    fn from(document: IntervalDocument) -> Self {
        let (resource, intervals) = match document {
            IntervalDocument::Named {
                resource,
                intervals,
            } => (resource, intervals),
            IntervalDocument::Listed(intervals) => (None, intervals),
        };
        Self {
            resource,
            intervals: close_transitions(intervals),
        }
    }
}

/// Close every record that has no end at the next record's start.
fn close_transitions(mut intervals: Vec<Interval>) -> Vec<Interval> {
    let next_starts: Vec<_> = intervals.iter().skip(1).map(|next| next.start).collect();
    for (interval, next_start) in intervals.iter_mut().zip(next_starts) {
        if interval.end.is_none() {
            interval.end = Some(next_start);
        }
    }
    intervals
}

/// Parse an interval document from a string.
pub fn parse_intervals(contents: &str, format: IntervalFileFormat) -> Result<IntervalBatch> {
    let document: IntervalDocument = match format {
        IntervalFileFormat::Json => {
            serde_json::from_str(contents).context("Failed to parse JSON interval document")?
        }
        IntervalFileFormat::Yaml => {
            serde_yaml::from_str(contents).context("Failed to parse YAML interval document")?
        }
    };
    Ok(document.into())
}

/// Interval source reading a single file.
#[derive(Debug, Clone)]
pub struct FileIntervalSource {
    path: PathBuf,
    format: IntervalFileFormat,
}

impl FileIntervalSource {
    /// Create a source, detecting the format from the extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = IntervalFileFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a source with an explicit format.
    pub fn with_format(path: impl Into<PathBuf>, format: IntervalFileFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IntervalSource for FileIntervalSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<IntervalBatch> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        debug!(path = %self.path.display(), format = ?self.format, bytes = contents.len(), "reading interval file");

        let mut batch = parse_intervals(&contents, self.format)
            .with_context(|| format!("Invalid interval file {}", self.path.display()))?;

        if batch.resource.is_none() {
            batch.resource = self
                .path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string);
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AvailabilityType;
    use chrono::DateTime;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            IntervalFileFormat::from_path(Path::new("a/history.yaml")),
            IntervalFileFormat::Yaml
        );
        assert_eq!(
            IntervalFileFormat::from_path(Path::new("history.YML")),
            IntervalFileFormat::Yaml
        );
        assert_eq!(
            IntervalFileFormat::from_path(Path::new("history.json")),
            IntervalFileFormat::Json
        );
        assert_eq!(
            IntervalFileFormat::from_path(Path::new("history")),
            IntervalFileFormat::Json
        );
    }

    #[test]
    fn test_parse_transition_list() {
        let json = r#"[
            { "state": "unknown", "start": 0 },
            { "state": "up", "start": 10000 },
            { "state": "down", "start": 20000 }
        ]"#;
        let batch = parse_intervals(json, IntervalFileFormat::Json).unwrap();

        assert_eq!(batch.resource, None);
        assert_eq!(batch.intervals.len(), 3);
        assert_eq!(batch.intervals[0].end, DateTime::from_timestamp_millis(10_000));
        assert_eq!(batch.intervals[1].end, DateTime::from_timestamp_millis(20_000));
        assert!(batch.intervals[2].is_open());
        assert_eq!(batch.intervals[2].state, AvailabilityType::Down);
    }

    #[test]
    fn test_parse_named_yaml() {
        let yaml = r"
resource: db-primary
intervals:
  - { state: up, start: 1000, end: 5000 }
  - { state: disabled, start: 5000 }
";
        let batch = parse_intervals(yaml, IntervalFileFormat::Yaml).unwrap();
        assert_eq!(batch.resource.as_deref(), Some("db-primary"));
        assert_eq!(batch.intervals[0].end, DateTime::from_timestamp_millis(5_000));
        assert!(batch.intervals[1].is_open());
    }

    #[test]
    fn test_explicit_end_is_kept() {
        let json = r#"[
            { "state": "up", "start": 0, "end": 5 },
            { "state": "down", "start": 10 }
        ]"#;
        let batch = parse_intervals(json, IntervalFileFormat::Json).unwrap();
        assert_eq!(batch.intervals[0].end, DateTime::from_timestamp_millis(5));
    }

    #[test]
    fn test_rejects_unknown_state() {
        let json = r#"[{ "state": "degraded", "start": 0 }]"#;
        assert!(parse_intervals(json, IntervalFileFormat::Json).is_err());
    }
}
