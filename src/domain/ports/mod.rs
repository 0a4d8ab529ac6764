//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters implement:
//! - Clock: Source of "now" for resolving open intervals
//! - IntervalSource: Supplier of a resource's interval history
//!
//! These traits keep the analysis independent of wall-clock time and of
//! how interval records are stored.

pub mod clock;
pub mod interval_source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use interval_source::{IntervalBatch, IntervalSource};
