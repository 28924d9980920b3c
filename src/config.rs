//! Runtime configuration and the fixed parts of the output contract.
//!
//! Everything here is resolved once at startup and passed down; nothing in
//! the pipeline reads globals or the environment ad hoc.

use std::path::PathBuf;

/// Maximum number of address ranges written to a single CSV file.
pub const MAX_RULES_PER_CSV_FILE: usize = 135;

/// Root element that marks the input as a public IP address listing.
pub const ROOT_ELEMENT: &str = "AzurePublicIpAddresses";

/// Fixed destination address of every generated rule.
pub const DESTINATION_IP: &str = "1.1.1.1";

/// Fixed port specification of every generated rule.
pub const DESTINATION_PORTS: &str = "TCP-111";

/// Exact CSV header line. The trailing space in "Destination Ending IP " is
/// part of the output contract.
pub const CSV_HEADER: &str =
    "Source Starting IP,Source Ending IP,Destination Starting IP,Destination Ending IP ,Ports";

/// Configuration for one converter run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the input XML file.
    pub source: PathBuf,
    /// Directory the CSV files are written to.
    pub output_dir: PathBuf,
    /// Ranges per CSV file, [`MAX_RULES_PER_CSV_FILE`] unless a test shrinks it.
    pub max_rules_per_file: usize,
}

impl RunConfig {
    /// Build a config from CLI inputs. The output directory defaults to the
    /// current working directory, or the system temp directory if that cannot
    /// be determined.
    pub fn new(source: PathBuf, output_dir: Option<PathBuf>) -> RunConfig {
        let output_dir = output_dir
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir()));
        RunConfig {
            source,
            output_dir,
            max_rules_per_file: MAX_RULES_PER_CSV_FILE,
        }
    }

    /// Base name for output files: the input file name without its extension.
    pub fn base_name(&self) -> String {
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string())
    }
}
