pub mod availability_type;
pub mod config;
pub mod interval;
pub mod interval_series;
pub mod report;

pub use availability_type::AvailabilityType;
pub use config::{Config, LogFormat, LoggingConfig, ReportConfig, RotationPolicy};
pub use interval::Interval;
pub use interval_series::IntervalSeries;
pub use report::AvailabilityReport;
