//! Implied volatility from observed option prices.
//!
//! This module recovers the volatility parameter that reproduces an
//! observed option price under one of two pricing models.
//!
//! # Black-Scholes
//!
//! There is no analytical inverse of the Black-Scholes formula, so the
//! call value is inverted with Newton-Raphson starting from 10%. The
//! iteration is well behaved because vega (∂price/∂σ) is strictly
//! positive. Puts are converted to the equivalent call price with
//! put-call parity before iterating.
//!
//! # Bachelier
//!
//! The normal model is inverted in closed form with Jäckel's rational
//! approximation, avoiding the instability of root finding on short-dated
//! near-the-money quotes.
//!
//! # Example
//!
//! ```
//! use impliedvol_rs::volatility::{Bachelier, IVParams, SolverConfig, solve_iv};
//!
//! let params = IVParams::call(100.0, 100.0, 30.0 / 365.0, 0.05);
//!
//! let (iv, _) = solve_iv(&params, 1.0, &SolverConfig::default()).unwrap();
//! println!("Black-Scholes IV: {:.2}%", iv * 100.0);
//!
//! let put = IVParams::put(100.0, 100.0, 30.0 / 365.0, 0.05);
//! let normal_vol = Bachelier::implied_vol(&put, 1.5).unwrap();
//! println!("Normal vol: {normal_vol:.4}");
//! ```

mod bachelier;
mod black_scholes;
mod error;
mod normal;
mod solver;
mod types;

pub use bachelier::{BRANCH_POINT, Bachelier};
pub use black_scholes::BlackScholes;
pub use error::{FailureKind, IVError};
pub use normal::{norm_cdf, norm_pdf, normalised_intrinsic};
pub use solver::{SolverConfig, solve_iv};
pub use types::{IVParams, ModelKind, OptionType, UnderlyingKind, UnknownVariant};
