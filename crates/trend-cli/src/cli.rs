//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Compare the slopes of two linear trends
///
/// Fits an OLS trend line to each of two series sharing a predictor and
/// tests whether the slopes differ. Without `--config` the embedded
/// National_Leaders / National_Failures dataset (1990-2013) is used.
#[derive(Parser, Debug)]
#[command(name = "trend-compare")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Dataset file (JSON, or TOML with a .toml extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the coefficient table of each fit
    #[arg(long)]
    pub summary: bool,

    /// Fit the two trends in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Log filter implied by the verbosity flag
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
