//! Domain errors for availability analysis.

use thiserror::Error;

/// Domain-level errors that can occur while analysing an interval series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// The series has no intervals, so there is no current state or last change.
    #[error("Interval series is empty")]
    EmptySeries,

    /// The series violates the ordering or contiguity contract.
    #[error("Invalid interval series at index {index}: {reason}")]
    InvalidSeries { index: usize, reason: String },
}

pub type AvailabilityResult<T> = Result<T, AvailabilityError>;

impl AvailabilityError {
    pub(crate) fn invalid(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            index,
            reason: reason.into(),
        }
    }
}
