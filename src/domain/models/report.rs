//! Serializable availability report.
//!
//! The report is the boundary shape handed to output consumers (CLI, REST
//! endpoints, dashboards). Durations are integer milliseconds, instants are
//! epoch milliseconds and percentages are fractions in `[0, 1]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::availability_type::AvailabilityType;

/// Snapshot of every statistic derived from one interval series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// Name of the resource the intervals belong to, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// The instant open intervals were resolved against
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub generated_at: DateTime<Utc>,

    /// Number of intervals in the series
    pub interval_count: usize,

    /// State of the most recent interval
    pub current: Option<AvailabilityType>,

    /// Start of the most recent interval
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_change: Option<DateTime<Utc>>,

    /// Number of `Down` intervals
    pub failures: u64,

    /// Number of `Disabled` intervals
    pub disabled_count: u64,

    pub up_time_ms: i64,
    pub down_time_ms: i64,
    pub disabled_time_ms: i64,
    pub unknown_time_ms: i64,
    pub known_time_ms: i64,

    /// Observed span from the first real instant to the end of the series
    pub total_span_ms: i64,

    pub up_percentage: f64,
    pub down_percentage: f64,
    pub disabled_percentage: f64,

    /// Mean time between failures
    pub mtbf_ms: i64,

    /// Mean time to repair
    pub mttr_ms: i64,

    /// Up time accumulated in each failure-to-failure cycle
    #[serde(default)]
    pub failure_cycles_ms: Vec<i64>,

    /// Down time accumulated in each repair cycle
    #[serde(default)]
    pub repair_cycles_ms: Vec<i64>,
}

impl AvailabilityReport {
    /// Attach the resource name to the report.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }
}
