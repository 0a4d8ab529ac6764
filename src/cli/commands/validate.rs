//! `availability validate` command.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::adapters::FileIntervalSource;
use crate::cli::display::{format_instant, output, CommandOutput};
use crate::domain::models::IntervalSeries;
use crate::domain::ports::IntervalSource;

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub file: String,
    pub resource: Option<String>,
    pub valid: bool,
    pub interval_count: usize,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub first_start: Option<chrono::DateTime<chrono::Utc>>,
    pub open_ended: bool,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "{} {} is a valid interval series",
            console::style("\u{2713}").green().bold(),
            self.file
        )];
        if let Some(resource) = &self.resource {
            lines.push(format!("Resource: {resource}"));
        }
        lines.push(format!("Intervals: {}", self.interval_count));
        lines.push(format!("First start: {}", format_instant(self.first_start)));
        lines.push(format!(
            "Last interval: {}",
            if self.open_ended { "open" } else { "closed" }
        ));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Validate a history file regardless of the `validate_input` setting.
pub fn execute(file: &Path, json_mode: bool) -> Result<()> {
    let source = FileIntervalSource::new(file);
    let batch = source.load()?;

    let series = IntervalSeries::new(batch.intervals)
        .with_context(|| format!("{} is not a valid interval series", file.display()))?;

    output(
        &ValidateOutput {
            file: file.display().to_string(),
            resource: batch.resource,
            valid: true,
            interval_count: series.len(),
            first_start: series.first().map(|interval| interval.start),
            open_ended: series.last().is_some_and(|interval| interval.is_open()),
        },
        json_mode,
    );
    Ok(())
}
