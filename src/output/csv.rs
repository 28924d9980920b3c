//! CSV output for allow-list batches.

use crate::config::{CSV_HEADER, DESTINATION_IP, DESTINATION_PORTS};
use crate::error::Result;
use crate::processing::Batch;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name for one batch: `<base>_<region>_<index>.csv`.
pub fn batch_file_name(base_name: &str, batch: &Batch) -> String {
    format!("{base_name}_{}_{}.csv", batch.region, batch.index)
}

/// Write one batch to its own CSV file under `output_dir`.
///
/// Create-or-truncate semantics: an existing file is overwritten, never
/// appended to. The file is flushed and closed before this returns, so a
/// write failure can not leave a dangling handle for the next batch.
pub fn write_batch(output_dir: &Path, base_name: &str, batch: &Batch) -> Result<PathBuf> {
    let path = output_dir.join(batch_file_name(base_name, batch));
    log::debug!(
        "write_batch() path={} rules={}",
        path.display(),
        batch.rules.len()
    );

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{CSV_HEADER}")?;
    for rule in &batch.rules {
        writeln!(
            writer,
            "{},{},{DESTINATION_IP},{DESTINATION_IP},{DESTINATION_PORTS}",
            rule.first, rule.last
        )?;
    }
    writer.flush()?;

    Ok(path)
}
