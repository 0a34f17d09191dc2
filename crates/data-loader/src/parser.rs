//! Parser for sales CSV files.
//!
//! Format:
//! ```text
//! region,sales,rep
//! North,120,Alex
//! South,95,Blake
//! ```
//!
//! The first non-blank line is the header. Columns are located by name
//! (case-insensitive), so their order is free and extra columns are ignored.
//! Fields are comma-separated and trimmed; quoting is not supported.

use crate::error::{DataLoadError, Result};
use crate::types::Record;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const REGION: &str = "region";
const SALES: &str = "sales";
const REP: &str = "rep";

/// Positions of the required columns within a row
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    region: usize,
    sales: usize,
    rep: usize,
    width: usize,
}

impl ColumnLayout {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<String> = header
            .split(',')
            .map(|name| name.trim().to_ascii_lowercase())
            .collect();

        let find = |column: &str| {
            names
                .iter()
                .position(|name| name == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            region: find(REGION)?,
            sales: find(SALES)?,
            rep: find(REP)?,
            width: names.len(),
        })
    }

    /// Number of fields a row needs so that every required column is present
    fn required_fields(&self) -> usize {
        self.region.max(self.sales).max(self.rep) + 1
    }
}

/// Read and parse a sales CSV file
pub fn parse_sales_file(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_sales(&content, &file)
}

/// Parse CSV text into records
///
/// `file` is only used to label parse errors.
pub fn parse_sales(content: &str, file: &str) -> Result<Vec<Record>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let layout = match lines.next() {
        Some((_, header)) => ColumnLayout::from_header(header)?,
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < layout.required_fields() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: layout.width,
                found: fields.len(),
                line: line_no,
            });
        }

        let sales = fields[layout.sales]
            .parse::<u64>()
            .map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("Invalid sales '{}': {}", fields[layout.sales], e),
            })?;

        records.push(Record::new(
            fields[layout.region],
            sales,
            fields[layout.rep],
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_file() {
        let content = "region,sales,rep\nNorth,120,Alex\nSouth,95,Blake\n";
        let records = parse_sales(content, "sales.csv").unwrap();

        assert_eq!(
            records,
            vec![
                Record::new("North", 120, "Alex"),
                Record::new("South", 95, "Blake"),
            ]
        );
    }

    #[test]
    fn test_columns_located_by_name() {
        let content = "Rep, Quarter, SALES, Region\nCasey, Q1, 140, West\n\n";
        let records = parse_sales(content, "sales.csv").unwrap();

        assert_eq!(records, vec![Record::new("West", 140, "Casey")]);
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_sales("", "sales.csv").unwrap().is_empty());
        assert!(parse_sales("region,sales,rep\n", "sales.csv").unwrap().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = parse_sales("region,rep\nNorth,Alex\n", "sales.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn { ref column } if column == "sales"));
    }

    #[test]
    fn test_negative_sales_rejected() {
        let err = parse_sales("region,sales,rep\nNorth,-5,Alex\n", "sales.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_short_row_reports_line() {
        let content = "region,sales,rep\n\nNorth,120\n";
        let err = parse_sales(content, "sales.csv").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 3, found: 2, line: 3 }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_sales_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
