//! Service layer
//!
//! Availability computations and the service that feeds them:
//! - `AvailabilitySummary`: Per-state durations, counts and percentages
//! - `reliability`: Failure and repair cycle analysis (MTBF / MTTR)
//! - `AvailabilityService`: Loads history from a source and summarizes it

pub mod availability_service;
pub mod availability_summary;
pub mod reliability;

pub use availability_service::{AvailabilityService, LoadedSeries};
pub use availability_summary::AvailabilitySummary;
pub use reliability::CycleStats;
