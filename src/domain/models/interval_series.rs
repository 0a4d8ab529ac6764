//! Ordered interval series for a single monitored resource.
//!
//! A series is the input to availability analysis. Its intervals are sorted
//! ascending by start, contiguous (each closed interval ends exactly where
//! the next one starts) and only the last one may be open.
//!
//! The first interval gets special treatment when it is `Unknown` and starts
//! at the epoch: that placeholder means "no real history before this point"
//! and its duration is excluded from every aggregate.

use chrono::{DateTime, Duration, Utc};

use super::availability_type::AvailabilityType;
use super::interval::Interval;
use crate::domain::errors::{AvailabilityError, AvailabilityResult};

/// Immutable, ordered sequence of availability intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSeries {
    intervals: Vec<Interval>,
}

impl IntervalSeries {
    /// Build a series, validating ordering and contiguity.
    ///
    /// An empty series is valid.
    pub fn new(intervals: Vec<Interval>) -> AvailabilityResult<Self> {
        Self::validate(&intervals)?;
        Ok(Self { intervals })
    }

    /// Build a series without validation.
    ///
    /// Malformed input produces undefined (but non-panicking) results.
    pub const fn from_unchecked(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// Build a contiguous series from `(state, start)` transitions.
    ///
    /// Each interval ends where the next one starts; the last one is open.
    pub fn from_transitions<I>(transitions: I) -> AvailabilityResult<Self>
    where
        I: IntoIterator<Item = (AvailabilityType, DateTime<Utc>)>,
    {
        let transitions: Vec<_> = transitions.into_iter().collect();
        let intervals = transitions
            .iter()
            .enumerate()
            .map(|(i, &(state, start))| Interval {
                state,
                start,
                end: transitions.get(i + 1).map(|&(_, next_start)| next_start),
            })
            .collect();
        Self::new(intervals)
    }

    /// Check the series contract.
    pub fn validate(intervals: &[Interval]) -> AvailabilityResult<()> {
        let last_index = intervals.len().saturating_sub(1);

        for (index, interval) in intervals.iter().enumerate() {
            match interval.end {
                Some(end) if end < interval.start => {
                    return Err(AvailabilityError::invalid(
                        index,
                        format!(
                            "end {} precedes start {}",
                            end.timestamp_millis(),
                            interval.start.timestamp_millis()
                        ),
                    ));
                }
                None if index != last_index => {
                    return Err(AvailabilityError::invalid(
                        index,
                        "only the last interval may be open",
                    ));
                }
                _ => {}
            }

            if let (Some(end), Some(next)) = (interval.end, intervals.get(index + 1)) {
                if end != next.start {
                    return Err(AvailabilityError::invalid(
                        index,
                        format!(
                            "end {} does not meet next start {}",
                            end.timestamp_millis(),
                            next.start.timestamp_millis()
                        ),
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn first(&self) -> Option<&Interval> {
        self.intervals.first()
    }

    /// The most recent interval.
    pub fn last(&self) -> Option<&Interval> {
        self.intervals.last()
    }

    /// Returns true if the interval at `index` is the leading epoch-zero
    /// `Unknown` placeholder, which is excluded from all aggregates.
    pub fn is_sentinel(&self, index: usize) -> bool {
        index == 0
            && self
                .intervals
                .first()
                .is_some_and(Interval::is_epoch_unknown)
    }

    /// Duration of a single interval, resolving an open end to `now`.
    pub fn duration(interval: &Interval, now: DateTime<Utc>) -> Duration {
        interval.duration(now)
    }

    /// Sum the durations of every interval whose state matches `predicate`.
    ///
    /// The leading epoch-zero `Unknown` placeholder never contributes.
    pub fn total_duration<P>(&self, predicate: P, now: DateTime<Utc>) -> Duration
    where
        P: Fn(AvailabilityType) -> bool,
    {
        self.intervals
            .iter()
            .enumerate()
            .filter(|(index, interval)| predicate(interval.state) && !self.is_sentinel(*index))
            .fold(Duration::zero(), |total, (_, interval)| {
                total + interval.duration(now)
            })
    }

    /// Count the intervals whose state matches `predicate`.
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(AvailabilityType) -> bool,
    {
        self.intervals
            .iter()
            .filter(|interval| predicate(interval.state))
            .count()
    }

    /// Time from the first observed instant to the end of the series.
    ///
    /// A leading epoch-zero `Unknown` placeholder is not part of the observed
    /// span, so the span then starts where the placeholder ends.
    pub fn observed_span(&self, now: DateTime<Utc>) -> Duration {
        let Some(last) = self.intervals.last() else {
            return Duration::zero();
        };

        let first_index = usize::from(self.is_sentinel(0));
        self.intervals.get(first_index).map_or_else(Duration::zero, |first| {
            last.end_or(now) - first.start
        })
    }
}

impl<'a> IntoIterator for &'a IntervalSeries {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl TryFrom<Vec<Interval>> for IntervalSeries {
    type Error = AvailabilityError;

    fn try_from(intervals: Vec<Interval>) -> Result<Self, Self::Error> {
        Self::new(intervals)
    }
}
