use anyhow::Result;

use crate::domain::models::Interval;

/// Intervals recorded for one resource, as delivered by a source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalBatch {
    /// Resource name, when the source knows it
    pub resource: Option<String>,

    /// Intervals sorted ascending by start
    pub intervals: Vec<Interval>,
}

/// Port for loading the availability history of a resource
///
/// Implementations hand back intervals already sorted ascending by start,
/// contiguous, and with only the last one open. The analysis layer never
/// re-sorts or de-duplicates.
///
/// # Examples
///
/// ```no_run
/// use resource_availability::domain::ports::IntervalSource;
/// use anyhow::Result;
///
/// fn example(source: &dyn IntervalSource) -> Result<()> {
///     let batch = source.load()?;
///     println!("{} intervals", batch.intervals.len());
///     Ok(())
/// }
/// ```
pub trait IntervalSource: Send + Sync {
    /// Short human-readable description of where intervals come from
    fn describe(&self) -> String;

    /// Load the interval history
    fn load(&self) -> Result<IntervalBatch>;
}
