//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern, plus `apply_filter`, the
//! one-call form used by the dashboard.

use crate::filters::{RegionFilter, RepFilter};
use crate::selection::FilterSelection;
use crate::traits::Filter;
use crate::view::FilteredView;
use data_loader::Record;
use std::collections::BTreeSet;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(RegionFilter)
///     .add_filter(RepFilter);
///
/// let view = pipeline.apply(dataset.records(), &selection);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The dashboard's pipeline: region membership, then rep match.
    pub fn standard() -> Self {
        Self::new().add_filter(RegionFilter).add_filter(RepFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to a copy of the records.
    ///
    /// ## Algorithm
    /// 1. Copy the input records (the dataset itself is never touched)
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Wrap the survivors in a FilteredView
    ///
    /// An empty pipeline returns every record.
    pub fn apply(&self, records: &[Record], selection: &FilterSelection) -> FilteredView {
        let mut current = records.to_vec();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, selection);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        FilteredView::new(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter `dataset` by rep and regions.
///
/// A record is kept iff its region is in `region_filter` and `rep_filter`
/// is empty or equals its rep. Dataset order is preserved.
///
/// `rep_filter` must already have passed `validate_rep_filter`.
pub fn apply_filter(
    dataset: &[Record],
    rep_filter: &str,
    region_filter: &BTreeSet<String>,
) -> FilteredView {
    let selection = FilterSelection {
        rep_filter: rep_filter.to_string(),
        region_filter: region_filter.clone(),
    };
    FilterPipeline::standard().apply(dataset, &selection)
}
