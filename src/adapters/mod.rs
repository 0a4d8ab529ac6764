//! Adapters implementing domain ports.

pub mod file;

pub use file::{FileIntervalSource, IntervalFileFormat};
