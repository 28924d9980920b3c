//! Conversion logic between the parsed document and the output files.
//!
//! This module contains the business logic of the pipeline:
//! - [`batch`] - fixed-size batching and usable-range computation

mod batch;

// Re-export public functions
pub use batch::{batch_region, usable_range, Batch, UsableRange};
