//! The user's current filter criteria.

use data_loader::KnownValues;
use std::collections::BTreeSet;

/// Rep and region criteria for one dashboard pass.
///
/// - `rep_filter`: `""` means "no rep filter"; otherwise an exact rep name.
/// - `region_filter`: the selected regions. An empty set selects nothing,
///   it is *not* a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub rep_filter: String,
    pub region_filter: BTreeSet<String>,
}

impl FilterSelection {
    /// Create a selection from a rep filter and any collection of region names.
    pub fn new<I, S>(rep_filter: impl Into<String>, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rep_filter: rep_filter.into(),
            region_filter: regions.into_iter().map(Into::into).collect(),
        }
    }

    /// The initial state of the dashboard: no rep filter, every region selected.
    pub fn defaults(known: &KnownValues) -> Self {
        Self {
            rep_filter: String::new(),
            region_filter: known.all_regions(),
        }
    }

    /// Whether a rep filter is active
    pub fn has_rep_filter(&self) -> bool {
        !self.rep_filter.is_empty()
    }

    /// Selected regions that don't occur in the dataset.
    ///
    /// These are accepted and simply match no record.
    pub fn unknown_regions<'a>(&'a self, known: &KnownValues) -> Vec<&'a str> {
        self.region_filter
            .iter()
            .filter(|region| !known.contains_region(region))
            .map(String::as_str)
            .collect()
    }
}
