// CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

/// Collect test results from a host event stream and write summary reports
#[derive(Parser, Debug)]
#[command(name = "testsummary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Write a JSON summary and an HTML report from test completion events",
    long_about = None
)]
pub struct Cli {
    /// Newline-delimited JSON event file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Configuration file (defaults to .testsummaryrc lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}
