//! Error types for implied volatility calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad classification of an [`IVError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The root search was well posed but did not produce a usable volatility.
    Domain,
    /// The inputs make the pricing formulas undefined.
    Degenerate,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Domain => f.write_str("domain"),
            FailureKind::Degenerate => f.write_str("degenerate"),
        }
    }
}

/// Errors specific to IV calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum IVError {
    /// Newton-Raphson solver did not converge within max iterations.
    ConvergenceFailure {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last IV estimate before giving up.
        last_iv: f64,
    },

    /// The price needs a volatility outside the configured search bracket.
    VolatilityOutOfBounds {
        /// Bound the solution lies beyond.
        volatility: f64,
        /// Minimum bound.
        min_bound: f64,
        /// Maximum bound.
        max_bound: f64,
    },

    /// Invalid input parameters for IV calculation.
    InvalidParams {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Price is below the lower no-arbitrage bound.
    PriceBelowIntrinsic {
        /// Market price observed.
        price: f64,
        /// Calculated intrinsic value.
        intrinsic: f64,
    },

    /// Price is above the upper no-arbitrage bound.
    PriceAboveUpperBound {
        /// Market price observed.
        price: f64,
        /// Upper bound of the option value.
        upper_bound: f64,
    },

    /// Closed-form inversion landed on a singular point of the formula.
    DegenerateInput {
        /// Description of the degenerate case.
        message: String,
    },
}

impl IVError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            IVError::ConvergenceFailure { .. }
            | IVError::VolatilityOutOfBounds { .. }
            | IVError::PriceBelowIntrinsic { .. }
            | IVError::PriceAboveUpperBound { .. } => FailureKind::Domain,
            IVError::InvalidParams { .. } | IVError::DegenerateInput { .. } => {
                FailureKind::Degenerate
            }
        }
    }
}

impl fmt::Display for IVError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IVError::ConvergenceFailure {
                iterations,
                last_iv,
            } => {
                write!(
                    f,
                    "solver did not converge after {iterations} iterations, last IV: {last_iv:.6}"
                )
            }
            IVError::VolatilityOutOfBounds {
                volatility,
                min_bound,
                max_bound,
            } => {
                write!(
                    f,
                    "volatility {volatility:.4} is outside bounds [{min_bound:.4}, {max_bound:.4}]"
                )
            }
            IVError::InvalidParams { message } => {
                write!(f, "invalid parameters: {message}")
            }
            IVError::PriceBelowIntrinsic { price, intrinsic } => {
                write!(
                    f,
                    "price {price:.4} is below intrinsic value {intrinsic:.4}"
                )
            }
            IVError::PriceAboveUpperBound { price, upper_bound } => {
                write!(
                    f,
                    "price {price:.4} is above upper bound {upper_bound:.4}"
                )
            }
            IVError::DegenerateInput { message } => {
                write!(f, "degenerate input: {message}")
            }
        }
    }
}

impl std::error::Error for IVError {}
