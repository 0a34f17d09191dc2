//! # Data Loader Crate
//!
//! This crate loads the sales dataset behind the dashboard.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Record, KnownValues, SalesDataset)
//! - **parser**: Parse CSV files into records
//! - **index**: Build and validate a SalesDataset
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::SalesDataset;
//! use std::path::Path;
//!
//! let dataset = SalesDataset::load_from_file(Path::new("data/sales.csv"))?;
//!
//! println!("Valid reps: {:?}", dataset.known_values().reps());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{KnownValues, Record, SalesDataset};
