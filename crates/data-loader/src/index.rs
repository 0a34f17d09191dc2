//! SalesDataset construction.
//!
//! Every constructor funnels through `SalesDataset::from_records`, which
//! validates the rows and derives the `KnownValues` exactly once.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;

impl SalesDataset {
    /// The built-in four-row dataset shown when no file is given
    pub fn sample() -> Self {
        let records = vec![
            Record::new("North", 120, "Alex"),
            Record::new("South", 95, "Blake"),
            Record::new("West", 140, "Casey"),
            Record::new("East", 110, "Dakota"),
        ];
        let known = KnownValues::from_records(&records);
        Self { records, known }
    }

    /// Build a dataset from already parsed records.
    ///
    /// Region and rep are trimmed; an empty region or rep is rejected because
    /// an empty rep would collide with the "no rep filter" selection.
    /// The total of all sales must fit in a `u64`, so every subset sum does too.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let records = records
            .into_iter()
            .map(|record| {
                let record = Record::new(record.region.trim(), record.sales, record.rep.trim());
                validate_record(&record)?;
                Ok(record)
            })
            .collect::<Result<Vec<_>>>()?;

        records
            .iter()
            .try_fold(0u64, |total, record| total.checked_add(record.sales))
            .ok_or_else(|| DataLoadError::InvalidValue {
                field: "sales".to_string(),
                value: "total exceeds u64::MAX".to_string(),
            })?;

        let known = KnownValues::from_records(&records);
        if records.is_empty() {
            tracing::warn!("Sales dataset is empty; every rep filter except \"\" will be rejected");
        }
        Ok(Self { records, known })
    }

    /// Load a dataset from a CSV file
    ///
    /// See `parser` for the accepted format.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading sales dataset from {:?}", path);

        let records = parser::parse_sales_file(path)?;
        let dataset = Self::from_records(records)?;

        tracing::info!(
            "Loaded {} records ({} regions, {} reps)",
            dataset.len(),
            dataset.known.regions.len(),
            dataset.known.reps.len()
        );
        Ok(dataset)
    }
}

fn validate_record(record: &Record) -> Result<()> {
    if record.region.is_empty() {
        return Err(DataLoadError::InvalidValue {
            field: "region".to_string(),
            value: record.region.clone(),
        });
    }
    if record.rep.is_empty() {
        return Err(DataLoadError::InvalidValue {
            field: "rep".to_string(),
            value: record.rep.clone(),
        });
    }
    Ok(())
}
