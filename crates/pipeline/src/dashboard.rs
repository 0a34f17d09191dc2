//! # Dashboard pass
//!
//! One full recomputation for the current selection:
//! 1. Validate the rep filter (stop here on `InvalidRep`)
//! 2. Filter the dataset into a fresh view
//! 3. Compute metrics and the sales-by-region chart series
//!
//! The pass holds no state. Call it again whenever the selection changes.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use data_loader::SalesDataset;

use crate::filter_pipeline::FilterPipeline;
use crate::metrics::{compute_metrics, sales_by_region, Metrics, RegionSales};
use crate::selection::FilterSelection;
use crate::validation::{validate_rep_filter, FilterError};
use crate::view::FilteredView;

/// Everything the presentation layer renders for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub view: FilteredView,
    pub metrics: Metrics,
    pub chart: Vec<RegionSales>,
}

/// Run one dashboard pass.
///
/// Returns `FilterError::InvalidRep` without computing anything else when the
/// rep filter names no known rep.
pub fn evaluate(
    dataset: &SalesDataset,
    selection: &FilterSelection,
) -> Result<DashboardSnapshot, FilterError> {
    let start = Instant::now();
    let known = dataset.known_values();

    if let Err(err) = validate_rep_filter(&selection.rep_filter, known.reps()) {
        warn!("Rejected rep filter {:?}", selection.rep_filter);
        return Err(err);
    }

    let unknown = selection.unknown_regions(known);
    if !unknown.is_empty() {
        warn!("Selected regions not in dataset, they match nothing: {:?}", unknown);
    }

    let view = FilterPipeline::standard().apply(dataset.records(), selection);
    let metrics = compute_metrics(&view);
    let chart = sales_by_region(&view);

    info!(
        "Dashboard pass: {} of {} records, total sales {} ({:?})",
        metrics.count,
        dataset.len(),
        metrics.total_sales,
        start.elapsed()
    );

    Ok(DashboardSnapshot { view, metrics, chart })
}
