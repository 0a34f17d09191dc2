//! Filter-and-aggregate pipeline for the sales dashboard.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - Rep filter validation
//! - Metrics and the sales-by-region chart series
//!
//! ## Architecture
//! Every change to the selection triggers one pass:
//! 1. `validate_rep_filter` rejects unknown reps (the pass stops here)
//! 2. `apply_filter` keeps the matching records, in dataset order
//! 3. `compute_metrics` / `sales_by_region` derive the numbers to display
//!
//! `evaluate` runs all three steps.
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::SalesDataset;
//! use pipeline::{evaluate, FilterSelection};
//!
//! let dataset = SalesDataset::sample();
//! let selection = FilterSelection::new("Alex", ["North", "South"]);
//!
//! let snapshot = evaluate(&dataset, &selection)?;
//! println!("{} rows, {} total", snapshot.metrics.count, snapshot.metrics.total_sales);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod selection;
pub mod validation;
pub mod view;
pub mod metrics;
pub mod dashboard;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::{apply_filter, FilterPipeline};
pub use selection::FilterSelection;
pub use validation::{validate_rep_filter, FilterError};
pub use view::FilteredView;
pub use metrics::{compute_metrics, sales_by_region, Metrics, RegionSales};
pub use dashboard::{evaluate, DashboardSnapshot};
