//! Filter to keep only records from the selected regions.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use data_loader::Record;

/// Keeps records whose region is in `selection.region_filter`.
///
/// An empty region set keeps nothing. Regions that aren't in the data
/// simply never match.
pub struct RegionFilter;

impl Filter for RegionFilter {
    fn name(&self) -> &str {
        "RegionFilter"
    }

    fn apply(&self, records: Vec<Record>, selection: &FilterSelection) -> Vec<Record> {
        records
            .into_iter()
            .filter(|record| selection.region_filter.contains(&record.region))
            .collect()
    }
}
