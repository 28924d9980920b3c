use azure_allowlist_csv::config::RunConfig;
use azure_allowlist_csv::output::ConsoleReport;
use clap::Parser;
use std::path::PathBuf;

/// Convert the published Azure public IP address list into firewall
/// allow-list CSV files, one file per batch of ranges per region.
#[derive(Parser)]
#[command(name = "azure-allowlist-csv", version, about)]
struct Cli {
    /// The publicly available list of Azure address ranges (XML)
    xml_file: PathBuf,

    /// Directory the CSV files are written to (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    // log4rs.yml is optional; without it the run is just unlogged
    let _ = log4rs::init_file("log4rs.yml", Default::default());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let cfg = RunConfig::new(cli.xml_file, cli.output);
    if let Err(e) = azure_allowlist_csv::convert(&cfg, &ConsoleReport) {
        log::error!("convert failed: {e}");
        eprintln!("ERROR: {e}");
        if matches!(e, azure_allowlist_csv::Error::FileNotFound(_)) {
            eprintln!("Run with --help for usage.");
        }
        std::process::exit(e.exit_code());
    }
}
