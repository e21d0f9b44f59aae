//! Checksummed JSON report of a valued batch.

use super::batch::{BatchSummary, QuoteOutcome};
use super::error::TradeFileError;
use super::value::Valuation;
use crate::volatility::FailureKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

/// A converged quote with its input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedQuote {
    /// 0-based position in the input.
    pub index: usize,
    /// Record identifier.
    pub id: String,
    /// Valuation result.
    pub valuation: Valuation,
}

/// A quote that produced no volatility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedQuote {
    /// 0-based position in the input.
    pub index: usize,
    /// Record identifier.
    pub id: String,
    /// Failure classification.
    pub kind: FailureKind,
    /// Human readable reason.
    pub reason: String,
}

/// Everything known about a batch after valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Converged quotes in input order.
    pub valuations: Vec<ValuedQuote>,
    /// Failed quotes in input order.
    pub failures: Vec<FailedQuote>,
    /// Batch counts.
    pub summary: BatchSummary,
}

impl ValuationReport {
    /// Splits outcomes into valuations and failures.
    #[must_use]
    pub fn from_outcomes(outcomes: &[QuoteOutcome]) -> Self {
        let mut valuations = Vec::new();
        let mut failures = Vec::new();

        for outcome in outcomes {
            match &outcome.result {
                Ok(valuation) => valuations.push(ValuedQuote {
                    index: outcome.index,
                    id: outcome.id.clone(),
                    valuation: valuation.clone(),
                }),
                Err(error) => failures.push(FailedQuote {
                    index: outcome.index,
                    id: outcome.id.clone(),
                    kind: error.kind(),
                    reason: error.to_string(),
                }),
            }
        }

        let summary = BatchSummary::from_outcomes(outcomes);
        trace!("report summary: {:?}", summary);

        Self {
            valuations,
            failures,
            summary,
        }
    }
}

/// Format version used for checksum-enabled valuation reports.
pub const VALUATION_REPORT_FORMAT_VERSION: u32 = 1;

/// Wrapper that provides checksum validation for `ValuationReport` instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReportPackage {
    /// Version of the report schema for forward compatibility.
    pub version: u32,
    /// Report payload.
    pub report: ValuationReport,
    /// Hex-encoded checksum of the serialized report.
    pub checksum: String,
}

impl ValuationReportPackage {
    /// Creates a new report package computing the checksum of the report contents.
    pub fn new(report: ValuationReport) -> Result<Self, TradeFileError> {
        let checksum = Self::compute_checksum(&report)?;

        Ok(Self {
            version: VALUATION_REPORT_FORMAT_VERSION,
            report,
            checksum,
        })
    }

    /// Serializes the package to JSON.
    pub fn to_json(&self) -> Result<String, TradeFileError> {
        serde_json::to_string_pretty(self).map_err(|error| TradeFileError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes the package from JSON.
    pub fn from_json(data: &str) -> Result<Self, TradeFileError> {
        serde_json::from_str(data).map_err(|error| TradeFileError::DeserializationError {
            message: error.to_string(),
        })
    }

    /// Validates the checksum and version.
    pub fn validate(&self) -> Result<(), TradeFileError> {
        if self.version != VALUATION_REPORT_FORMAT_VERSION {
            return Err(TradeFileError::UnsupportedVersion {
                found: self.version,
                expected: VALUATION_REPORT_FORMAT_VERSION,
            });
        }

        let computed = Self::compute_checksum(&self.report)?;
        if computed != self.checksum {
            return Err(TradeFileError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual: computed,
            });
        }

        Ok(())
    }

    /// Consumes the package and returns the validated report.
    pub fn into_report(self) -> Result<ValuationReport, TradeFileError> {
        self.validate()?;
        Ok(self.report)
    }

    fn compute_checksum(report: &ValuationReport) -> Result<String, TradeFileError> {
        let payload =
            serde_json::to_vec(report).map_err(|error| TradeFileError::SerializationError {
                message: error.to_string(),
            })?;

        let mut hasher = Sha256::new();
        hasher.update(payload);

        let checksum_bytes = hasher.finalize();
        Ok(format!("{:x}", checksum_bytes))
    }
}
