//! `availability summary` command.

use anyhow::{Context, Result};
use chrono::DateTime;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::adapters::FileIntervalSource;
use crate::cli::display::{output, CommandOutput, TableFormatter};
use crate::domain::models::{AvailabilityReport, Config};
use crate::domain::ports::{Clock, FixedClock, SystemClock};
use crate::services::AvailabilityService;

#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    #[serde(flatten)]
    pub report: AvailabilityReport,
    #[serde(skip)]
    pub precision: usize,
}

impl CommandOutput for SummaryOutput {
    fn to_human(&self) -> String {
        TableFormatter::new(self.precision).format_report(&self.report)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.report).unwrap_or_default()
    }
}

pub fn execute(file: &Path, now: Option<i64>, config: &Config, json_mode: bool) -> Result<()> {
    let source = Arc::new(FileIntervalSource::new(file));

    let report = match now {
        Some(millis) => {
            let instant = DateTime::from_timestamp_millis(millis)
                .with_context(|| format!("--now {millis} is outside the representable range"))?;
            build_report(source, Arc::new(FixedClock::new(instant)), config)?
        }
        None => build_report(source, Arc::new(SystemClock), config)?,
    };

    output(
        &SummaryOutput {
            report,
            precision: config.report.percentage_precision,
        },
        json_mode,
    );
    Ok(())
}

fn build_report<C: Clock>(
    source: Arc<FileIntervalSource>,
    clock: Arc<C>,
    config: &Config,
) -> Result<AvailabilityReport> {
    AvailabilityService::new(source, clock, config.report.clone()).report()
}
