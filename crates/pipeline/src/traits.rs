//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the sales records.

use crate::selection::FilterSelection;
use data_loader::Record;

/// Core trait for filtering records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters take ownership of the Vec<Record> and return the kept rows,
///   preserving their relative order
/// - Filtering never fails: invalid selections are rejected before the
///   pipeline runs
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership)
    /// * `selection` - The user's current filter criteria
    fn apply(&self, records: Vec<Record>, selection: &FilterSelection) -> Vec<Record>;
}
