//! Input parsing for the converter.
//!
//! This module handles reading the source document:
//! - [`xml`] - loading and validating the published address list

mod xml;

// Re-export public functions
pub use xml::{load_document, parse_document};
