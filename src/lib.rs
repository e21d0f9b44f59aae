//! # impliedvol-rs
//!
//! Implied volatility for batches of European option trades.
//!
//! Every trade names the pricing model its price should be inverted
//! under:
//!
//! - **Black-Scholes**: the call value is inverted with Newton-Raphson;
//!   put prices are first turned into call prices with put-call parity.
//! - **Bachelier**: the normal-model price is inverted in closed form
//!   with Jäckel's rational approximation and a single third-order
//!   refinement.
//!
//! Records are valued independently. A record whose volatility cannot be
//! recovered yields a typed error instead of a number, and the CSV writer
//! leaves it out of the output.
//!
//! ## Modules
//!
//! - [`volatility`]: normal distribution primitives, pricing models, the
//!   Newton-Raphson solver and the Bachelier closed form.
//! - [`valuation`]: input records, per-record valuation, batch
//!   processing, CSV adapters and the checksummed JSON report.
//!
//! ## Example
//!
//! ```
//! use impliedvol_rs::prelude::*;
//!
//! let input = "\
//! id,underlying_kind,underlying,rate,days,strike,side,model,price
//! 1,Stock,100,0.05,30,100,Call,BlackScholes,1.0
//! 2,Stock,100,0.05,30,100,Call,BlackScholes,150.0
//! ";
//!
//! let quotes = read_quotes(input.as_bytes()).unwrap();
//! let outcomes = value_batch(&quotes, &ValuationConfig::default());
//!
//! let mut output = Vec::new();
//! let written = write_valuations(&mut output, &outcomes).unwrap();
//! assert_eq!(written, 1);
//! ```

pub mod prelude;
pub mod valuation;
pub mod volatility;
