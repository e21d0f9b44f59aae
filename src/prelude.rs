//! Commonly used types and functions.

pub use crate::valuation::csv::{
    OUTPUT_HEADER, read_quotes, read_quotes_from_path, write_valuations,
    write_valuations_to_path,
};
pub use crate::valuation::{
    BatchSummary, Quote, QuoteOutcome, TradeFileError, Valuation, ValuationConfig,
    ValuationReport, ValuationReportPackage, value_batch, value_quote,
};
pub use crate::volatility::{
    Bachelier, BlackScholes, FailureKind, IVError, IVParams, ModelKind, OptionType,
    SolverConfig, UnderlyingKind, solve_iv,
};
