//! Validation of user-supplied filter input.
//!
//! Only the rep filter is validated. Region choices come from a fixed list
//! of options, so an unknown region is not an error; it matches nothing.

use thiserror::Error;

/// Errors that stop a dashboard pass before any filtering happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A non-empty rep filter names no rep in the dataset
    #[error("Invalid rep '{attempted}', expected one of: {}", .known_reps.join(", "))]
    InvalidRep {
        attempted: String,
        known_reps: Vec<String>,
    },
}

/// Check a rep filter against the reps present in the dataset.
///
/// `""` (no filter) and exact matches pass. Anything else returns
/// `FilterError::InvalidRep`, and the caller must not go on to filter or
/// aggregate.
pub fn validate_rep_filter(rep_filter: &str, known_reps: &[String]) -> Result<(), FilterError> {
    if rep_filter.is_empty() || known_reps.iter().any(|rep| rep == rep_filter) {
        return Ok(());
    }
    Err(FilterError::InvalidRep {
        attempted: rep_filter.to_string(),
        known_reps: known_reps.to_vec(),
    })
}
