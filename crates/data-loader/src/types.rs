//! Core domain types for the sales dataset.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Record`: one row of sales data
//! - `KnownValues`: the distinct regions and reps found in the data
//! - `SalesDataset`: the immutable, ordered record sequence plus its known values

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

// =============================================================================
// Record
// =============================================================================

/// One sales entry in the dataset.
///
/// Records are immutable once loaded; the dataset hands out references and
/// filters clone the rows they keep.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub region: String,
    /// Sales amount, never negative
    pub sales: u64,
    pub rep: String,
}

impl Record {
    pub fn new(region: impl Into<String>, sales: u64, rep: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            sales,
            rep: rep.into(),
        }
    }
}

// =============================================================================
// KnownValues
// =============================================================================

/// Distinct region and rep values derived from a dataset.
///
/// Computed once when the dataset is built and passed explicitly into
/// validation, so the accepted values can never drift from the data.
/// Both lists keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownValues {
    pub(crate) regions: Vec<String>,
    pub(crate) reps: Vec<String>,
}

impl KnownValues {
    /// Collect the distinct regions and reps of `records`.
    pub fn from_records(records: &[Record]) -> Self {
        let mut seen_regions = HashSet::new();
        let mut seen_reps = HashSet::new();
        let mut known = Self::default();

        for record in records {
            if seen_regions.insert(record.region.as_str()) {
                known.regions.push(record.region.clone());
            }
            if seen_reps.insert(record.rep.as_str()) {
                known.reps.push(record.rep.clone());
            }
        }
        known
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn reps(&self) -> &[String] {
        &self.reps
    }

    /// Regions in alphabetical order, the order a region picker offers them
    pub fn sorted_regions(&self) -> Vec<String> {
        let mut sorted = self.regions.clone();
        sorted.sort();
        sorted
    }

    /// Every known region as a set (the default region selection)
    pub fn all_regions(&self) -> BTreeSet<String> {
        self.regions.iter().cloned().collect()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }
}

// =============================================================================
// SalesDataset - the in-memory table
// =============================================================================

/// The fixed, ordered sequence of records for one session.
///
/// Construct it with `SalesDataset::sample()`, `SalesDataset::from_records()`
/// or `SalesDataset::load_from_file()`; there are no mutators.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    pub(crate) records: Vec<Record>,
    pub(crate) known: KnownValues,
}

impl SalesDataset {
    /// All records in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct regions and reps, computed at load time
    pub fn known_values(&self) -> &KnownValues {
        &self.known
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `sales` over the whole dataset
    pub fn total_sales(&self) -> u64 {
        self.records.iter().map(|r| r.sales).sum()
    }
}
