pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use config::RunConfig;
pub use error::{Error, Result};

use output::Report;

/// Run the whole pipeline: load the document, then per region batch the
/// subnets and write one CSV per batch.
///
/// Any failure aborts the entire run; files already written stay on disk.
pub fn convert(cfg: &RunConfig, report: &dyn Report) -> Result<()> {
    log::info!("#Start convert() source={}", cfg.source.display());

    if !cfg.source.exists() {
        return Err(Error::FileNotFound(cfg.source.clone()));
    }

    let document = input::load_document(&cfg.source)?;
    report.banner(&cfg.source, cfg.max_rules_per_file, &cfg.output_dir);

    let base_name = cfg.base_name();
    let mut total_files = 0;
    for region in &document.regions {
        report.region_start(region.display_name());
        let batches = processing::batch_region(region, cfg.max_rules_per_file)?;

        let mut ranges = 0;
        for batch in &batches {
            let path = output::write_batch(&cfg.output_dir, &base_name, batch)?;
            report.file_written(&path, batch.rules.len());
            ranges += batch.rules.len();
        }
        report.region_summary(region.display_name(), ranges, batches.len());
        total_files += batches.len();
    }

    log::info!(
        "# End convert() regions={} files={}",
        document.regions.len(),
        total_files
    );
    Ok(())
}
