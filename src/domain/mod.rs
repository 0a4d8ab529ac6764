//! Domain layer for availability analysis
//!
//! This module contains the interval model, domain errors and port traits.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{AvailabilityError, AvailabilityResult};
