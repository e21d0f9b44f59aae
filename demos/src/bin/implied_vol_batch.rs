//! Batch implied volatility from a trades file.
//!
//! Usage:
//!
//! ```text
//! implied_vol_batch <input.csv> <output.csv> [report.json]
//! ```
//!
//! Every row of the input is valued independently. Rows whose volatility
//! cannot be recovered are logged and left out of the output CSV; the
//! optional JSON report lists them together with the reason.

use impliedvol_rs::prelude::{
    ValuationConfig, ValuationReport, ValuationReportPackage, read_quotes_from_path,
    value_batch, write_valuations_to_path,
};
use std::fs;
use std::process::ExitCode;
use tracing::{error, info};

fn run(input: &str, output: &str, report: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let quotes = read_quotes_from_path(input)?;
    info!("Read {} quotes from {}", quotes.len(), input);

    let outcomes = value_batch(&quotes, &ValuationConfig::default());

    let written = write_valuations_to_path(output, &outcomes)?;
    info!(
        "Wrote {} valuations to {} ({} skipped)",
        written,
        output,
        outcomes.len() - written
    );

    if let Some(path) = report {
        let package = ValuationReportPackage::new(ValuationReport::from_outcomes(&outcomes))?;
        fs::write(path, package.to_json()?)?;
        info!("Wrote report to {} (checksum {})", path, package.checksum);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        let program = args.first().map_or("implied_vol_batch", String::as_str);
        error!("usage: {} <input.csv> <output.csv> [report.json]", program);
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2], args.get(3).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Batch failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
