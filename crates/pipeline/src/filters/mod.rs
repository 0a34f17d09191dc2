//! Filter implementations for the sales pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod region;
pub mod rep;

// Re-export for convenience
pub use region::RegionFilter;
pub use rep::RepFilter;
