// Main entry point for testsummary

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{error, info};

use testsummary::cli::Cli;
use testsummary::config::Config;
use testsummary::events;
use testsummary::report::SummaryReporter;

fn main() {
    let cli = Cli::parse();
    testsummary::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::load().unwrap_or_default(),
    };

    if cli.show_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let mut reporter = SummaryReporter::new(&config.output);
    info!(
        "Writing artifacts to {} and {}",
        reporter.json_path().display(),
        reporter.html_path().display()
    );

    let delivered = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open event file: {}", path.display()))?;
            events::drive(BufReader::new(file), &mut reporter)?
        }
        None => events::drive(io::stdin().lock(), &mut reporter)?,
    };

    info!("Processed {} test event(s)", delivered);
    Ok(())
}
