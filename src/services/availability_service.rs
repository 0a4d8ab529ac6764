//! Availability service.
//!
//! Coordinates an [`IntervalSource`] and a [`Clock`]: loads a resource's
//! history, validates it according to configuration and produces a summary.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::domain::models::{AvailabilityReport, IntervalSeries, ReportConfig};
use crate::domain::ports::{Clock, IntervalSource};
use crate::services::AvailabilitySummary;

/// A loaded series together with the resource it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSeries {
    pub resource: Option<String>,
    pub series: IntervalSeries,
}

pub struct AvailabilityService<S: IntervalSource, C: Clock> {
    source: Arc<S>,
    clock: Arc<C>,
    config: ReportConfig,
}

impl<S: IntervalSource, C: Clock> AvailabilityService<S, C> {
    pub fn new(source: Arc<S>, clock: Arc<C>, config: ReportConfig) -> Self {
        Self {
            source,
            clock,
            config,
        }
    }

    /// Load the interval history and build a series.
    ///
    /// When `validate_input` is disabled the series is accepted as-is and
    /// malformed input yields undefined statistics.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn load_series(&self) -> Result<LoadedSeries> {
        let batch = self
            .source
            .load()
            .with_context(|| format!("Failed to load intervals from {}", self.source.describe()))?;

        debug!(
            resource = batch.resource.as_deref().unwrap_or("-"),
            intervals = batch.intervals.len(),
            "interval history loaded"
        );

        let series = if self.config.validate_input {
            IntervalSeries::new(batch.intervals).context("Interval history failed validation")?
        } else {
            warn!("interval validation disabled, accepting series unchecked");
            IntervalSeries::from_unchecked(batch.intervals)
        };

        Ok(LoadedSeries {
            resource: batch.resource,
            series,
        })
    }

    /// Summarize the source's history as of the clock's current instant.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn summarize(&self) -> Result<(Option<String>, AvailabilitySummary)> {
        let loaded = self.load_series()?;
        let summary = AvailabilitySummary::with_clock(loaded.series, self.clock.as_ref());

        debug!(
            now = summary.now().timestamp_millis(),
            failures = summary.failures(),
            mtbf_ms = summary.mtbf().num_milliseconds(),
            mttr_ms = summary.mttr().num_milliseconds(),
            "availability summary computed"
        );

        Ok((loaded.resource, summary))
    }

    /// Summarize and snapshot into a report.
    pub fn report(&self) -> Result<AvailabilityReport> {
        let (resource, summary) = self.summarize()?;
        let report = summary.report();
        Ok(match resource {
            Some(name) => report.with_resource(name),
            None => report,
        })
    }
}
