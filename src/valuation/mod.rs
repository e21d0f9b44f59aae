//! Batch valuation of option quotes.
//!
//! Each [`Quote`] is valued on its own: the spot is derived from the
//! underlying quote convention, the model named on the record is
//! dispatched, and the outcome is either a [`Valuation`] or the typed
//! [`crate::volatility::IVError`] explaining why no volatility exists.
//! The decision to drop failed records is taken by the writers in
//! [`csv`], not by the valuation itself.

pub mod batch;
pub mod csv;
pub mod error;
pub mod quote;
pub mod report;
pub mod value;

pub use batch::{BatchSummary, QuoteOutcome, value_batch};
pub use error::TradeFileError;
pub use quote::Quote;
pub use report::{
    FailedQuote, VALUATION_REPORT_FORMAT_VERSION, ValuationReport, ValuationReportPackage,
    ValuedQuote,
};
pub use value::{DEFAULT_DAYS_PER_YEAR, Valuation, ValuationConfig, value_quote};
