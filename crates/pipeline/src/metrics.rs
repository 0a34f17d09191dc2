//! Aggregates derived from a filtered view.
//!
//! - `Metrics`: total sales and row count, the two headline numbers
//! - `RegionSales`: one bar of the sales-by-region chart

use crate::view::FilteredView;
use serde::Serialize;
use std::collections::HashMap;

/// Summary numbers for a filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Sum of `sales` over the view, 0 when empty
    pub total_sales: u64,
    /// Number of rows in the view
    pub count: usize,
}

/// Total sales of one region within a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSales {
    pub region: String,
    pub sales: u64,
}

/// Compute total sales and row count for a view.
pub fn compute_metrics(view: &FilteredView) -> Metrics {
    Metrics {
        total_sales: view.iter().map(|record| record.sales).sum(),
        count: view.len(),
    }
}

/// Sales summed per region, in order of each region's first row in the view.
pub fn sales_by_region(view: &FilteredView) -> Vec<RegionSales> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<RegionSales> = Vec::new();

    for record in view {
        match positions.get(record.region.as_str()) {
            Some(&idx) => series[idx].sales += record.sales,
            None => {
                positions.insert(record.region.as_str(), series.len());
                series.push(RegionSales {
                    region: record.region.clone(),
                    sales: record.sales,
                });
            }
        }
    }
    series
}
