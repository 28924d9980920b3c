//! Output for the converter.
//!
//! This module handles everything the run leaves behind or shows:
//! - [`csv`] - one allow-list CSV file per batch
//! - [`terminal`] - operator progress reporting

mod csv;
mod terminal;

pub use csv::{batch_file_name, write_batch};
pub use terminal::{ConsoleReport, Report, SilentReport};
