//! Failure and repair cycle analysis (MTBF / MTTR).
//!
//! Both metrics average a per-cycle sum over the windows between consecutive
//! boundary events:
//!
//! - **Failure cycles** are bounded by the starts of `Down` intervals. Each
//!   cycle accumulates the `Up` time inside it. Fewer than two failures means
//!   there is no complete cycle yet.
//! - **Repair cycles** are bounded by the starts of `Up` intervals (recoveries).
//!   When the very first interval is already `Down`, the resource is assumed
//!   to have been up just before monitoring began, so its start acts as a
//!   virtual recovery. Each cycle accumulates the `Down` time inside it, and
//!   only cycles that contain a failure count as repairs.
//!
//! `Disabled` and `Unknown` intervals occupy time inside a cycle but never
//! close or split one. Time after the last boundary is never included.
//!
//! Boundaries are found with one linear scan; per-cycle sums are then
//! accumulated over index windows, so the whole analysis is O(n).

use chrono::{DateTime, Duration, Utc};

use crate::domain::models::{AvailabilityType, IntervalSeries};

/// Per-cycle durations produced by failure or repair analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleStats {
    per_cycle: Vec<Duration>,
}

impl CycleStats {
    /// Durations accumulated in each counted cycle, oldest first.
    pub fn per_cycle(&self) -> &[Duration] {
        &self.per_cycle
    }

    /// Number of counted cycles.
    pub fn count(&self) -> usize {
        self.per_cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_cycle.is_empty()
    }

    /// Sum over all counted cycles.
    pub fn total(&self) -> Duration {
        self.per_cycle
            .iter()
            .fold(Duration::zero(), |total, cycle| total + *cycle)
    }

    /// Mean per-cycle duration, truncated to whole milliseconds.
    ///
    /// Zero when there are no cycles.
    pub fn mean(&self) -> Duration {
        let Ok(count) = i64::try_from(self.per_cycle.len()) else {
            return Duration::zero();
        };
        if count == 0 {
            return Duration::zero();
        }
        Duration::milliseconds(self.total().num_milliseconds() / count)
    }

    /// Per-cycle durations in milliseconds.
    pub fn per_cycle_millis(&self) -> Vec<i64> {
        self.per_cycle
            .iter()
            .map(Duration::num_milliseconds)
            .collect()
    }
}

/// Accumulated time of one state inside a single boundary window.
#[derive(Debug, Clone, Copy)]
struct WindowSum {
    total: Duration,
    occurrences: usize,
}

/// Indices of every interval in `state`, in series order.
fn boundary_indices(series: &IntervalSeries, state: AvailabilityType) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter(|(_, interval)| interval.state == state)
        .map(|(index, _)| index)
        .collect()
}

/// Sum `measured` time inside each window `[boundaries[i], boundaries[i + 1])`.
///
/// Windows are index ranges; because the series is sorted and contiguous an
/// interval belongs to the window containing its start.
fn window_sums(
    series: &IntervalSeries,
    boundaries: &[usize],
    measured: AvailabilityType,
    now: DateTime<Utc>,
) -> Vec<WindowSum> {
    let intervals = series.intervals();

    boundaries
        .windows(2)
        .map(|window| {
            intervals[window[0]..window[1]]
                .iter()
                .filter(|interval| interval.state == measured)
                .fold(
                    WindowSum {
                        total: Duration::zero(),
                        occurrences: 0,
                    },
                    |acc, interval| WindowSum {
                        total: acc.total + interval.duration(now),
                        occurrences: acc.occurrences + 1,
                    },
                )
        })
        .collect()
}

/// Up time between consecutive failures.
pub fn failure_cycles(series: &IntervalSeries, now: DateTime<Utc>) -> CycleStats {
    let failures = boundary_indices(series, AvailabilityType::Down);

    CycleStats {
        per_cycle: window_sums(series, &failures, AvailabilityType::Up, now)
            .into_iter()
            .map(|window| window.total)
            .collect(),
    }
}

/// Down time between consecutive recoveries.
pub fn repair_cycles(series: &IntervalSeries, now: DateTime<Utc>) -> CycleStats {
    let mut recoveries = Vec::with_capacity(series.len());
    if series.first().is_some_and(|first| first.state.is_down()) {
        recoveries.push(0);
    }
    recoveries.extend(boundary_indices(series, AvailabilityType::Up));

    CycleStats {
        per_cycle: window_sums(series, &recoveries, AvailabilityType::Down, now)
            .into_iter()
            .filter(|window| window.occurrences > 0)
            .map(|window| window.total)
            .collect(),
    }
}

/// Mean time between failures.
pub fn mean_time_between_failures(series: &IntervalSeries, now: DateTime<Utc>) -> Duration {
    failure_cycles(series, now).mean()
}

/// Mean time to repair.
pub fn mean_time_to_repair(series: &IntervalSeries, now: DateTime<Utc>) -> Duration {
    repair_cycles(series, now).mean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use AvailabilityType::{Disabled, Down, Unknown, Up};

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(seconds * 1000).unwrap()
    }

    fn series(transitions: &[(AvailabilityType, i64)]) -> IntervalSeries {
        IntervalSeries::from_transitions(transitions.iter().map(|&(s, t)| (s, at(t)))).unwrap()
    }

    fn secs(values: &[i64]) -> Vec<Duration> {
        values.iter().map(|&s| Duration::seconds(s)).collect()
    }

    #[test]
    fn test_failure_cycles_alternating() {
        let s = series(&[
            (Down, 100),
            (Up, 200),
            (Down, 400),
            (Up, 500),
            (Down, 700),
            (Up, 800),
            (Down, 1100),
            (Up, 1200),
            (Down, 1500),
        ]);
        let cycles = failure_cycles(&s, at(2000));
        assert_eq!(cycles.per_cycle(), secs(&[200, 200, 300, 300]).as_slice());
        assert_eq!(cycles.mean(), Duration::seconds(250));
    }

    #[test]
    fn test_failure_cycles_need_two_failures() {
        assert!(failure_cycles(&series(&[(Down, 600), (Up, 1000)]), at(2000)).is_empty());
        assert!(failure_cycles(&series(&[(Up, 600), (Down, 1000)]), at(2000)).is_empty());
        assert_eq!(
            mean_time_between_failures(&series(&[(Disabled, 600), (Up, 1000), (Down, 1200)]), at(2000)),
            Duration::zero()
        );
    }

    #[test]
    fn test_failure_cycles_ignore_trailing_up() {
        let s = series(&[(Down, 0), (Up, 1000), (Down, 5000), (Up, 6000)]);
        assert_eq!(mean_time_between_failures(&s, at(9000)), Duration::seconds(4000));
    }

    #[test]
    fn test_disabled_and_unknown_bridge_failure_cycles() {
        let s = series(&[
            (Down, 50),
            (Up, 200),
            (Disabled, 300),
            (Down, 350),
            (Up, 400),
            (Unknown, 450),
            (Down, 550),
        ]);
        let cycles = failure_cycles(&s, at(600));
        assert_eq!(cycles.per_cycle(), secs(&[100, 50]).as_slice());
        assert_eq!(cycles.mean(), Duration::seconds(75));
    }

    #[test]
    fn test_repair_cycles_virtual_boundary_for_leading_down() {
        let s = series(&[(Down, 600), (Up, 1000)]);
        let cycles = repair_cycles(&s, at(2000));
        assert_eq!(cycles.per_cycle(), secs(&[400]).as_slice());
        assert_eq!(mean_time_to_repair(&s, at(2000)), Duration::seconds(400));
    }

    #[test]
    fn test_repair_cycles_without_recovery() {
        assert!(repair_cycles(&series(&[(Down, 600)]), at(2000)).is_empty());
        assert!(repair_cycles(&series(&[(Up, 100), (Down, 600)]), at(2000)).is_empty());
        assert!(repair_cycles(&series(&[(Disabled, 100)]), at(2000)).is_empty());
    }

    #[test]
    fn test_repair_cycles_skip_windows_without_failure() {
        // Up -> Disabled -> Up is not a recovery
        let s = series(&[(Down, 50), (Up, 200), (Disabled, 300), (Up, 400), (Unknown, 450), (Down, 550)]);
        let cycles = repair_cycles(&s, at(600));
        assert_eq!(cycles.per_cycle(), secs(&[150]).as_slice());
        assert_eq!(cycles.mean(), Duration::seconds(150));
    }

    #[test]
    fn test_repair_cycles_ignore_leading_non_down() {
        let s = series(&[(Unknown, 1), (Down, 100), (Up, 200), (Down, 300), (Up, 400)]);
        // Down at 100 precedes the first real recovery and has no virtual boundary
        let cycles = repair_cycles(&s, at(500));
        assert_eq!(cycles.per_cycle(), secs(&[100]).as_slice());
    }

    #[test]
    fn test_mean_truncates_to_millis() {
        let stats = CycleStats {
            per_cycle: vec![Duration::milliseconds(1), Duration::milliseconds(2)],
        };
        assert_eq!(stats.mean(), Duration::milliseconds(1));
        assert_eq!(stats.total(), Duration::milliseconds(3));
        assert_eq!(stats.per_cycle_millis(), vec![1, 2]);
        assert_eq!(CycleStats::default().mean(), Duration::zero());
    }
}
