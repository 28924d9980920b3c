//! Operator-facing progress reporting.
//!
//! The pipeline talks to a [`Report`] trait so tests can run silently;
//! [`ConsoleReport`] is the colored terminal implementation used by the
//! binary.

use colored::Colorize;
use std::path::Path;

/// Progress reporting hooks, called by the pipeline as the run advances.
pub trait Report {
    /// Startup banner: source file, batch-size limit, output directory.
    fn banner(&self, source: &Path, max_rules: usize, output_dir: &Path);
    /// A region is about to be processed.
    fn region_start(&self, name: &str);
    /// One output file finished writing.
    fn file_written(&self, path: &Path, rules: usize);
    /// All batches of a region are on disk.
    fn region_summary(&self, name: &str, ranges: usize, files: usize);
}

/// Colored terminal reporter.
pub struct ConsoleReport;

impl Report for ConsoleReport {
    fn banner(&self, source: &Path, max_rules: usize, output_dir: &Path) {
        println!(
            "Converting {source} ({max_rules} ranges per file) -> {output_dir}",
            source = source.display().to_string().cyan(),
            output_dir = output_dir.display(),
        );
    }

    fn region_start(&self, name: &str) {
        println!("Region {name}:", name = name.cyan());
    }

    fn file_written(&self, path: &Path, rules: usize) {
        println!("  wrote {path} ({rules} rules)", path = path.display());
    }

    fn region_summary(&self, name: &str, ranges: usize, files: usize) {
        println!(
            "Region {name}: {ranges} address ranges in {files} {noun}",
            name = name.cyan(),
            noun = if files == 1 { "file" } else { "files" },
        );
    }
}

/// No-op reporter for tests.
pub struct SilentReport;

impl Report for SilentReport {
    fn banner(&self, _source: &Path, _max_rules: usize, _output_dir: &Path) {}
    fn region_start(&self, _name: &str) {}
    fn file_written(&self, _path: &Path, _rules: usize) {}
    fn region_summary(&self, _name: &str, _ranges: usize, _files: usize) {}
}
