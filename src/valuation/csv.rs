//! Fixed-schema comma-separated input and output.
//!
//! Input rows carry, in order: record id, underlying kind, underlying
//! price, risk-free rate, days to expiry, strike, option type, model and
//! market price. The first line is a header and is skipped.
//!
//! Output rows are written only for quotes that produced a volatility.

use super::batch::QuoteOutcome;
use super::error::TradeFileError;
use super::quote::Quote;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Input column names, in order.
pub const INPUT_FIELDS: [&str; 9] = [
    "id",
    "underlying_kind",
    "underlying_price",
    "risk_free_rate",
    "days_to_expiry",
    "strike",
    "option_type",
    "model",
    "market_price",
];

/// Header line of the output table.
pub const OUTPUT_HEADER: &str = "index,spot,strike,risk_free_rate,years_to_expiry,option_type,model_type,implied_volatility,market_price";

fn field<'a>(fields: &[&'a str], position: usize, line: usize) -> Result<&'a str, TradeFileError> {
    fields
        .get(position)
        .copied()
        .ok_or(TradeFileError::MissingField {
            line,
            field: INPUT_FIELDS[position],
        })
}

fn parse_field<T: FromStr>(
    fields: &[&str],
    position: usize,
    line: usize,
) -> Result<T, TradeFileError> {
    let raw = field(fields, position, line)?;
    raw.parse().map_err(|_| TradeFileError::InvalidField {
        line,
        field: INPUT_FIELDS[position],
        value: raw.to_string(),
    })
}

/// Parses one data row; `line` is the 1-based line number for errors.
pub fn parse_record(line: usize, record: &str) -> Result<Quote, TradeFileError> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();

    Ok(Quote {
        id: field(&fields, 0, line)?.to_string(),
        underlying_kind: parse_field(&fields, 1, line)?,
        underlying_price: parse_field(&fields, 2, line)?,
        risk_free_rate: parse_field(&fields, 3, line)?,
        days_to_expiry: parse_field(&fields, 4, line)?,
        strike: parse_field(&fields, 5, line)?,
        option_type: parse_field(&fields, 6, line)?,
        model: parse_field(&fields, 7, line)?,
        market_price: parse_field(&fields, 8, line)?,
    })
}

/// Reads all quotes, skipping the header and blank lines.
///
/// # Errors
/// Fails on the first unreadable line or malformed record.
pub fn read_quotes<R: BufRead>(reader: R) -> Result<Vec<Quote>, TradeFileError> {
    let mut quotes = Vec::new();

    for (offset, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        quotes.push(parse_record(offset + 1, &line)?);
    }

    debug!(count = quotes.len(), "quotes read");
    Ok(quotes)
}

/// Reads all quotes from a file.
///
/// # Errors
/// See [`read_quotes`]; also fails if the file cannot be opened.
pub fn read_quotes_from_path(path: impl AsRef<Path>) -> Result<Vec<Quote>, TradeFileError> {
    let file = File::open(path.as_ref()).map_err(|error| TradeFileError::Io {
        message: format!("{}: {error}", path.as_ref().display()),
    })?;
    read_quotes(BufReader::new(file))
}

/// Writes the header and one row per converged outcome.
///
/// Failed outcomes are skipped. Returns the number of rows written.
///
/// # Errors
/// Fails if the writer does.
pub fn write_valuations<W: Write>(
    mut writer: W,
    outcomes: &[QuoteOutcome],
) -> Result<usize, TradeFileError> {
    writeln!(writer, "{OUTPUT_HEADER}")?;

    let mut written = 0;
    for outcome in outcomes {
        let Some(valuation) = outcome.valuation() else {
            continue;
        };
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            outcome.index,
            valuation.spot,
            valuation.strike,
            valuation.risk_free_rate,
            valuation.years_to_expiry,
            valuation.option_type,
            valuation.model,
            valuation.implied_volatility,
            valuation.market_price,
        )?;
        written += 1;
    }

    writer.flush()?;
    debug!(written, skipped = outcomes.len() - written, "valuations written");
    Ok(written)
}

/// Writes valuations to a file, replacing it.
///
/// # Errors
/// See [`write_valuations`]; also fails if the file cannot be created.
pub fn write_valuations_to_path(
    path: impl AsRef<Path>,
    outcomes: &[QuoteOutcome],
) -> Result<usize, TradeFileError> {
    let file = File::create(path.as_ref()).map_err(|error| TradeFileError::Io {
        message: format!("{}: {error}", path.as_ref().display()),
    })?;
    write_valuations(BufWriter::new(file), outcomes)
}
