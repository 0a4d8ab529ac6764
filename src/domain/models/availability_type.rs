//! Availability state domain model.
//!
//! Every interval recorded for a monitored resource carries exactly one of
//! these states. The set is closed: no other values are recognized.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Reliability state of a resource over an interval.
///
/// - Up: The resource was reachable and operating
/// - Down: The resource failed
/// - Disabled: Monitoring of the resource was switched off
/// - Unknown: No availability data was reported
///
/// `Disabled` and `Unknown` are never treated as `Down` for failure
/// counting nor as `Up` for uptime. They still occupy time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityType {
    /// Resource is up
    Up,
    /// Resource is down
    Down,
    /// Resource monitoring is disabled
    Disabled,
    /// Resource state is unknown
    Unknown,
}

impl AvailabilityType {
    /// All states, ordered from least to most severe.
    pub const ALL: [Self; 4] = [Self::Up, Self::Disabled, Self::Unknown, Self::Down];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Disabled => "disabled",
            Self::Unknown => "unknown",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "disabled" => Some(Self::Disabled),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Severity rank used for ordering states.
    ///
    /// The rank is explicit so that reordering the variants never changes
    /// how states compare.
    pub const fn severity(&self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Disabled => 1,
            Self::Unknown => 2,
            Self::Down => 3,
        }
    }

    /// Returns true if this state is strictly more severe than `other`.
    pub const fn is_more_severe_than(&self, other: Self) -> bool {
        self.severity() > other.severity()
    }

    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Returns true for every state except `Unknown`.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl PartialOrd for AvailabilityType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AvailabilityType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl fmt::Display for AvailabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
