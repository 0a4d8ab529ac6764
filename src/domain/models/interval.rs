//! Availability interval domain model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::availability_type::AvailabilityType;

/// A contiguous span of time during which a resource held one state.
///
/// `start` is inclusive and `end` exclusive. An interval without an `end` is
/// open: it is still ongoing and resolves to "now" at query time. Instants
/// are serialized as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// State held during the interval
    pub state: AvailabilityType,

    /// Inclusive start of the interval
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start: DateTime<Utc>,

    /// Exclusive end of the interval; `None` while ongoing
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub end: Option<DateTime<Utc>>,
}

impl Interval {
    /// Create a closed interval.
    pub const fn closed(state: AvailabilityType, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            state,
            start,
            end: Some(end),
        }
    }

    /// Create an open (ongoing) interval.
    pub const fn open(state: AvailabilityType, start: DateTime<Utc>) -> Self {
        Self {
            state,
            start,
            end: None,
        }
    }

    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Resolve the end of the interval, substituting `now` for an open end.
    pub fn end_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end.unwrap_or(now)
    }

    /// Length of the interval with an open end resolved to `now`.
    ///
    /// A malformed interval whose end precedes its start yields a negative
    /// duration; well-formed input never does.
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        self.end_or(now) - self.start
    }

    /// Returns true if this interval is the "no history before this point"
    /// placeholder: `Unknown` starting at the epoch.
    pub fn is_epoch_unknown(&self) -> bool {
        self.state == AvailabilityType::Unknown && self.start == DateTime::<Utc>::UNIX_EPOCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_closed_duration_ignores_now() {
        let interval = Interval::closed(AvailabilityType::Up, at(1_000), at(4_000));
        assert_eq!(interval.duration(at(100_000)), Duration::milliseconds(3_000));
        assert!(!interval.is_open());
    }

    #[test]
    fn test_open_duration_resolves_to_now() {
        let interval = Interval::open(AvailabilityType::Down, at(1_000));
        assert_eq!(interval.duration(at(61_000)), Duration::milliseconds(60_000));
        assert_eq!(interval.end_or(at(61_000)), at(61_000));
        assert!(interval.is_open());
    }

    #[test]
    fn test_epoch_unknown_placeholder() {
        assert!(Interval::open(AvailabilityType::Unknown, at(0)).is_epoch_unknown());
        assert!(!Interval::open(AvailabilityType::Unknown, at(1)).is_epoch_unknown());
        assert!(!Interval::open(AvailabilityType::Disabled, at(0)).is_epoch_unknown());
    }

    #[test]
    fn test_serde_epoch_millis() {
        let interval = Interval::closed(AvailabilityType::Up, at(10_000), at(20_000));
        let json = serde_json::to_value(interval).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "state": "up", "start": 10_000, "end": 20_000 })
        );

        let open: Interval = serde_json::from_str(r#"{ "state": "down", "start": 5 }"#).unwrap();
        assert_eq!(open, Interval::open(AvailabilityType::Down, at(5)));
    }
}
