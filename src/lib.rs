//! Resource availability analysis
//!
//! Turns a resource's history of availability intervals (up, down, disabled,
//! unknown) into summary statistics: time spent per state, percentages,
//! failure counts, mean time between failures and mean time to repair.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Interval model, errors and port traits
//! - **Service Layer** (`services`): Availability and reliability computations
//! - **Adapters** (`adapters`): Interval sources backed by files
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use chrono::DateTime;
//! use resource_availability::{AvailabilitySummary, AvailabilityType, IntervalSeries};
//!
//! let at = |secs: i64| DateTime::from_timestamp_millis(secs * 1000).unwrap();
//! let series = IntervalSeries::from_transitions([
//!     (AvailabilityType::Up, at(0)),
//!     (AvailabilityType::Down, at(300)),
//! ])
//! .unwrap();
//!
//! let summary = AvailabilitySummary::new(series, at(400));
//! assert_eq!(summary.failures(), 1);
//! assert_eq!(summary.down_time().num_seconds(), 100);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AvailabilityReport, AvailabilityType, Config, Interval, IntervalSeries, LoggingConfig,
    ReportConfig,
};
pub use domain::ports::{Clock, FixedClock, IntervalSource, SystemClock};
pub use domain::{AvailabilityError, AvailabilityResult};
pub use services::{AvailabilityService, AvailabilitySummary, CycleStats};
