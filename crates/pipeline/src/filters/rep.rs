//! Filter to keep only one rep's records.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use data_loader::Record;

/// Keeps records whose rep equals `selection.rep_filter` exactly.
///
/// ## Algorithm
/// 1. If no rep filter is set (`""`), keep every record
/// 2. Otherwise keep records with an exact, case-sensitive rep match
pub struct RepFilter;

impl Filter for RepFilter {
    fn name(&self) -> &str {
        "RepFilter"
    }

    fn apply(&self, records: Vec<Record>, selection: &FilterSelection) -> Vec<Record> {
        if !selection.has_rep_filter() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| record.rep == selection.rep_filter)
            .collect()
    }
}
