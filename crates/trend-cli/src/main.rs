//! Trend slope comparison CLI
//!
//! Fits an OLS trend to each of two series and tests whether the slopes
//! differ. Results go to standard output, diagnostics and logs to standard
//! error.
//!
//! Usage:
//!   trend-compare                         # embedded dataset
//!   trend-compare --config data.json      # dataset file
//!   trend-compare --format json --summary

mod cli;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, OutputFormat};
use trend_core::{CoreError, DatasetConfig, TrendDataset};
use trend_models::{ModelError, TrendComparator};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error[{}]: {err:#}", error_kind(&err));
            ExitCode::FAILURE
        }
    }
}

/// Load the dataset, run the comparison and render every requested section
///
/// Nothing is printed until the whole computation has succeeded.
fn run(cli: &Cli) -> Result<String> {
    let dataset = load_dataset(cli)?;
    info!(
        predictor = dataset.predictor(),
        series_a = dataset.series_a().name(),
        series_b = dataset.series_b().name(),
        n = dataset.len(),
        "dataset loaded"
    );
    debug!(stats = %dataset.series_a().describe(), series = dataset.series_a().name());
    debug!(stats = %dataset.series_b().describe(), series = dataset.series_b().name());

    let result = TrendComparator::new()
        .parallel(cli.parallel)
        .compare(&dataset)?;

    let mut output = match cli.format {
        OutputFormat::Text => report::render_text(&result),
        OutputFormat::Json => {
            let mut json = report::render_json(&result).context("Failed to encode report")?;
            json.push('\n');
            json
        }
    };

    if cli.summary {
        output.push_str(&report::render_summaries(&result));
    }

    Ok(output)
}

fn load_dataset(cli: &Cli) -> Result<TrendDataset> {
    match &cli.config {
        Some(path) => {
            let dataset = DatasetConfig::load_from(path)?.into_dataset()?;
            Ok(dataset)
        }
        None => Ok(TrendDataset::embedded()?),
    }
}

/// Error kind printed in the diagnostic line
fn error_kind(err: &anyhow::Error) -> &'static str {
    if let Some(model) = err.downcast_ref::<ModelError>() {
        return model.kind();
    }

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::Data(_)) => "DataError",
        Some(_) => "ConfigError",
        None if err.downcast_ref::<trend_core::DataError>().is_some() => "DataError",
        None => "Error",
    }
}
