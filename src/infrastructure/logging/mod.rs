//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON output on stderr
//! - Optional rolling JSON log file

pub mod logger;

pub use logger::{parse_log_level, LoggerImpl};
