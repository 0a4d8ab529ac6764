//! Availability summary for a single resource.
//!
//! An [`AvailabilitySummary`] is computed once from a snapshot of intervals
//! and a single "now" instant. Every accessor is a pure read of values fixed
//! at construction, so repeated calls always agree with each other even if
//! wall-clock time moves on.

use chrono::{DateTime, Duration, Utc};

use crate::domain::errors::{AvailabilityError, AvailabilityResult};
use crate::domain::models::{AvailabilityReport, AvailabilityType, IntervalSeries};
use crate::domain::ports::Clock;
use crate::services::reliability::{self, CycleStats};

/// Per-state aggregates of one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StateTotals {
    up: Duration,
    down: Duration,
    disabled: Duration,
    unknown: Duration,
    failures: u64,
    disabled_count: u64,
}

impl StateTotals {
    fn aggregate(series: &IntervalSeries, now: DateTime<Utc>) -> Self {
        let total_of =
            |state: AvailabilityType| series.total_duration(|candidate| candidate == state, now);
        let count_of = |state: AvailabilityType| {
            u64::try_from(series.count(|candidate| candidate == state)).unwrap_or(u64::MAX)
        };

        Self {
            up: total_of(AvailabilityType::Up),
            down: total_of(AvailabilityType::Down),
            disabled: total_of(AvailabilityType::Disabled),
            unknown: total_of(AvailabilityType::Unknown),
            failures: count_of(AvailabilityType::Down),
            disabled_count: count_of(AvailabilityType::Disabled),
        }
    }
}

/// Derived availability statistics for one interval series.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Duration};
/// use resource_availability::domain::models::{AvailabilityType, IntervalSeries};
/// use resource_availability::services::AvailabilitySummary;
///
/// let at = |s: i64| DateTime::from_timestamp_millis(s * 1000).unwrap();
/// let series = IntervalSeries::from_transitions([
///     (AvailabilityType::Down, at(600)),
///     (AvailabilityType::Up, at(1000)),
/// ])
/// .unwrap();
///
/// let summary = AvailabilitySummary::new(series, at(2000));
/// assert_eq!(summary.mttr(), Duration::seconds(400));
/// assert_eq!(summary.failures(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySummary {
    series: IntervalSeries,
    now: DateTime<Utc>,
    totals: StateTotals,
    failure_cycles: CycleStats,
    repair_cycles: CycleStats,
}

impl AvailabilitySummary {
    /// Summarize `series`, resolving its open interval to `now`.
    pub fn new(series: IntervalSeries, now: DateTime<Utc>) -> Self {
        let totals = StateTotals::aggregate(&series, now);
        let failure_cycles = reliability::failure_cycles(&series, now);
        let repair_cycles = reliability::repair_cycles(&series, now);

        Self {
            series,
            now,
            totals,
            failure_cycles,
            repair_cycles,
        }
    }

    /// Summarize `series`, reading "now" from `clock` exactly once.
    pub fn with_clock(series: IntervalSeries, clock: &dyn Clock) -> Self {
        Self::new(series, clock.now())
    }

    /// The instant open intervals were resolved against.
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub const fn series(&self) -> &IntervalSeries {
        &self.series
    }

    /// Start of the most recent interval.
    pub fn last_change(&self) -> AvailabilityResult<DateTime<Utc>> {
        self.series
            .last()
            .map(|interval| interval.start)
            .ok_or(AvailabilityError::EmptySeries)
    }

    /// State of the most recent interval.
    pub fn current(&self) -> AvailabilityResult<AvailabilityType> {
        self.series
            .last()
            .map(|interval| interval.state)
            .ok_or(AvailabilityError::EmptySeries)
    }

    /// Number of `Down` intervals, including an ongoing one.
    pub const fn failures(&self) -> u64 {
        self.totals.failures
    }

    /// Number of `Disabled` intervals.
    pub const fn disabled_count(&self) -> u64 {
        self.totals.disabled_count
    }

    pub const fn up_time(&self) -> Duration {
        self.totals.up
    }

    pub const fn down_time(&self) -> Duration {
        self.totals.down
    }

    pub const fn disabled_time(&self) -> Duration {
        self.totals.disabled
    }

    /// Time spent `Unknown`, excluding a leading epoch-zero placeholder.
    pub const fn unknown_time(&self) -> Duration {
        self.totals.unknown
    }

    /// Time spent in any state other than `Unknown`.
    pub fn known_time(&self) -> Duration {
        self.totals.up + self.totals.down + self.totals.disabled
    }

    /// Observed span from the first real instant to the end of the series.
    pub fn total_span(&self) -> Duration {
        self.series.observed_span(self.now)
    }

    /// Fraction of known time spent `Up`.
    pub fn up_percentage(&self) -> f64 {
        self.fraction_of_known(self.totals.up)
    }

    /// Fraction of known time spent `Down`.
    pub fn down_percentage(&self) -> f64 {
        self.fraction_of_known(self.totals.down)
    }

    /// Fraction of known time spent `Disabled`.
    pub fn disabled_percentage(&self) -> f64 {
        self.fraction_of_known(self.totals.disabled)
    }

    /// Mean time between failures.
    pub fn mtbf(&self) -> Duration {
        self.failure_cycles.mean()
    }

    /// Mean time to repair.
    pub fn mttr(&self) -> Duration {
        self.repair_cycles.mean()
    }

    /// Up time of each failure-to-failure cycle.
    pub const fn failure_cycles(&self) -> &CycleStats {
        &self.failure_cycles
    }

    /// Down time of each repair cycle.
    pub const fn repair_cycles(&self) -> &CycleStats {
        &self.repair_cycles
    }

    /// Snapshot every statistic into a serializable report.
    pub fn report(&self) -> AvailabilityReport {
        AvailabilityReport {
            resource: None,
            generated_at: self.now,
            interval_count: self.series.len(),
            current: self.current().ok(),
            last_change: self.last_change().ok(),
            failures: self.failures(),
            disabled_count: self.disabled_count(),
            up_time_ms: self.up_time().num_milliseconds(),
            down_time_ms: self.down_time().num_milliseconds(),
            disabled_time_ms: self.disabled_time().num_milliseconds(),
            unknown_time_ms: self.unknown_time().num_milliseconds(),
            known_time_ms: self.known_time().num_milliseconds(),
            total_span_ms: self.total_span().num_milliseconds(),
            up_percentage: self.up_percentage(),
            down_percentage: self.down_percentage(),
            disabled_percentage: self.disabled_percentage(),
            mtbf_ms: self.mtbf().num_milliseconds(),
            mttr_ms: self.mttr().num_milliseconds(),
            failure_cycles_ms: self.failure_cycles.per_cycle_millis(),
            repair_cycles_ms: self.repair_cycles.per_cycle_millis(),
        }
    }

    fn fraction_of_known(&self, part: Duration) -> f64 {
        let known = self.known_time().num_milliseconds();
        if known == 0 {
            return 0.0;
        }
        part.num_milliseconds() as f64 / known as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use AvailabilityType::{Disabled, Down, Unknown, Up};

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(seconds * 1000).unwrap()
    }

    fn summary(transitions: &[(AvailabilityType, i64)], now: i64) -> AvailabilitySummary {
        let series =
            IntervalSeries::from_transitions(transitions.iter().map(|&(s, t)| (s, at(t)))).unwrap();
        AvailabilitySummary::new(series, at(now))
    }

    #[test]
    fn test_empty_series() {
        let s = AvailabilitySummary::new(IntervalSeries::default(), at(100));
        assert_eq!(s.last_change(), Err(AvailabilityError::EmptySeries));
        assert_eq!(s.current(), Err(AvailabilityError::EmptySeries));
        assert_eq!(s.failures(), 0);
        assert_eq!(s.known_time(), Duration::zero());
        assert_eq!(s.total_span(), Duration::zero());
        assert!(s.up_percentage().abs() < f64::EPSILON);
        assert_eq!(s.mtbf(), Duration::zero());
        assert_eq!(s.mttr(), Duration::zero());

        let report = s.report();
        assert_eq!(report.current, None);
        assert_eq!(report.last_change, None);
        assert_eq!(report.interval_count, 0);
    }

    #[test]
    fn test_with_clock_captures_now_once() {
        let series = IntervalSeries::from_transitions([(Up, at(10))]).unwrap();
        let s = AvailabilitySummary::with_clock(series, &FixedClock::new(at(70)));
        assert_eq!(s.now(), at(70));
        assert_eq!(s.up_time(), Duration::seconds(60));
        assert_eq!(s.up_time(), s.up_time());
    }

    #[test]
    fn test_known_time_and_percentages() {
        let s = summary(&[(Unknown, 0), (Up, 1000), (Down, 1200), (Disabled, 1500)], 2000);
        assert_eq!(s.known_time(), Duration::seconds(1000));
        assert!((s.up_percentage() - 0.2).abs() < 0.001);
        assert!((s.down_percentage() - 0.3).abs() < 0.001);
        assert!((s.disabled_percentage() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_unknown_only_has_zero_percentages() {
        let s = summary(&[(Unknown, 1)], 600);
        assert_eq!(s.known_time(), Duration::zero());
        assert!(s.up_percentage().abs() < f64::EPSILON);
        assert!(s.down_percentage().abs() < f64::EPSILON);
        assert!(s.disabled_percentage().abs() < f64::EPSILON);
        assert_eq!(s.unknown_time(), Duration::seconds(599));
    }

    #[test]
    fn test_report_matches_accessors() {
        let s = summary(
            &[(Unknown, 0), (Up, 100), (Down, 200), (Up, 400), (Down, 800), (Up, 900)],
            1000,
        );
        let report = s.report().with_resource("db-primary");

        assert_eq!(report.resource.as_deref(), Some("db-primary"));
        assert_eq!(report.generated_at, at(1000));
        assert_eq!(report.interval_count, 6);
        assert_eq!(report.current, Some(Up));
        assert_eq!(report.last_change, Some(at(900)));
        assert_eq!(report.failures, 2);
        assert_eq!(report.up_time_ms, 600_000);
        assert_eq!(report.down_time_ms, 300_000);
        assert_eq!(report.known_time_ms, 900_000);
        assert_eq!(report.total_span_ms, 900_000);
        assert_eq!(report.mtbf_ms, 400_000);
        assert_eq!(report.failure_cycles_ms, vec![400_000]);
        assert_eq!(report.mttr_ms, 150_000);
        assert_eq!(report.repair_cycles_ms, vec![200_000, 100_000]);
    }
}
