//! Batch valuation with per-record failure isolation.

use super::quote::Quote;
use super::value::{Valuation, ValuationConfig, value_quote};
use crate::volatility::{FailureKind, IVError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of valuing the quote at `index` in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteOutcome {
    /// 0-based position of the quote in the input.
    pub index: usize,
    /// Record identifier of the quote.
    pub id: String,
    /// Valuation or the reason it failed.
    pub result: Result<Valuation, IVError>,
}

impl QuoteOutcome {
    /// Returns the valuation if the quote converged.
    #[must_use]
    pub fn valuation(&self) -> Option<&Valuation> {
        self.result.as_ref().ok()
    }

    /// Returns true if the quote produced a volatility.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.result.is_ok()
    }
}

/// Counts over one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of quotes valued.
    pub total: usize,
    /// Quotes that produced a volatility.
    pub converged: usize,
    /// Quotes whose root search failed.
    pub domain_failures: usize,
    /// Quotes rejected as numerically undefined.
    pub degenerate: usize,
}

impl BatchSummary {
    /// Tallies a set of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[QuoteOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, outcome| {
                summary.total += 1;
                match &outcome.result {
                    Ok(_) => summary.converged += 1,
                    Err(error) => match error.kind() {
                        FailureKind::Domain => summary.domain_failures += 1,
                        FailureKind::Degenerate => summary.degenerate += 1,
                    },
                }
                summary
            })
    }

    /// Quotes that did not produce a volatility.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.domain_failures + self.degenerate
    }
}

/// Values every quote independently.
///
/// A failing quote never stops the batch; its error is kept in the
/// corresponding [`QuoteOutcome`] for the writer to act on.
#[must_use]
pub fn value_batch(quotes: &[Quote], config: &ValuationConfig) -> Vec<QuoteOutcome> {
    let outcomes: Vec<QuoteOutcome> = quotes
        .iter()
        .enumerate()
        .map(|(index, quote)| {
            let result = value_quote(quote, config);
            if let Err(error) = &result {
                warn!(
                    index,
                    id = %quote.id,
                    kind = %error.kind(),
                    "quote not valued: {error}"
                );
            }
            QuoteOutcome {
                index,
                id: quote.id.clone(),
                result,
            }
        })
        .collect();

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!(
        total = summary.total,
        converged = summary.converged,
        domain_failures = summary.domain_failures,
        degenerate = summary.degenerate,
        "batch valued"
    );

    outcomes
}
