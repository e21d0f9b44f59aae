//! Newton-Raphson solver for Black-Scholes implied volatility.
//!
//! This module provides a numerical solver to find the implied volatility
//! that makes the Black-Scholes call price equal to the observed market
//! price. Puts are first mapped to the equivalent call price through
//! put-call parity, so the iteration only ever runs on the call value,
//! which is monotonic in volatility.
//!
//! Monotonicity lets every iterate tighten a bracket `[low, high]` around
//! the root. A Newton step is taken whenever it lands inside that bracket;
//! otherwise the solver bisects, so the iterate never leaves the
//! configured volatility range.

use super::black_scholes::BlackScholes;
use super::error::IVError;
use super::types::{IVParams, OptionType};
use tracing::trace;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
    /// Convergence tolerance on the change in volatility between steps.
    pub tolerance: f64,
    /// Starting volatility (default: 0.1 = 10%).
    pub initial_guess: f64,
    /// Vega at or below this value forces a bisection step.
    pub min_vega: f64,
    /// Lower end of the volatility search range.
    pub min_iv: f64,
    /// Upper end of the volatility search range.
    pub max_iv: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-8,
            initial_guess: 0.1,
            min_vega: 1e-12,
            min_iv: 0.0,
            max_iv: 5.0,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial IV guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the vega floor below which Newton steps are not attempted.
    #[must_use]
    pub fn with_min_vega(mut self, min_vega: f64) -> Self {
        self.min_vega = min_vega;
        self
    }

    /// Sets the IV search range.
    #[must_use]
    pub fn with_bounds(mut self, min_iv: f64, max_iv: f64) -> Self {
        self.min_iv = min_iv;
        self.max_iv = max_iv;
        self
    }
}

/// Validates input parameters for IV calculation.
///
/// Spot, strike and time to expiry must be finite and strictly positive,
/// the rate must be finite.
pub(crate) fn validate_params(params: &IVParams) -> Result<(), IVError> {
    if !params.spot.is_finite() || params.spot <= 0.0 {
        return Err(IVError::InvalidParams {
            message: format!("spot price must be positive, got {}", params.spot),
        });
    }

    if !params.strike.is_finite() || params.strike <= 0.0 {
        return Err(IVError::InvalidParams {
            message: format!("strike price must be positive, got {}", params.strike),
        });
    }

    if !params.time_to_expiry.is_finite() || params.time_to_expiry <= 0.0 {
        return Err(IVError::InvalidParams {
            message: format!(
                "time to expiry must be positive, got {}",
                params.time_to_expiry
            ),
        });
    }

    if !params.risk_free_rate.is_finite() {
        return Err(IVError::InvalidParams {
            message: format!(
                "risk-free rate must be finite, got {}",
                params.risk_free_rate
            ),
        });
    }

    Ok(())
}

/// The search range must be a non-empty finite interval of non-negative
/// volatilities, and the starting point must be finite.
fn validate_config(config: &SolverConfig) -> Result<(), IVError> {
    let SolverConfig {
        min_iv,
        max_iv,
        initial_guess,
        ..
    } = *config;

    if !min_iv.is_finite() || !max_iv.is_finite() || min_iv < 0.0 || min_iv >= max_iv {
        return Err(IVError::InvalidParams {
            message: format!(
                "volatility bounds must satisfy 0 <= min < max, got [{min_iv}, {max_iv}]"
            ),
        });
    }

    if !initial_guess.is_finite() {
        return Err(IVError::InvalidParams {
            message: format!("initial guess must be finite, got {initial_guess}"),
        });
    }

    Ok(())
}

/// Rejects call prices outside `[max(0, S - K·e^(-rT)), S]`.
fn check_call_bounds(params: &IVParams, call_price: f64, tolerance: f64) -> Result<(), IVError> {
    if !call_price.is_finite() {
        return Err(IVError::InvalidParams {
            message: format!("market price must be finite, got {call_price}"),
        });
    }

    let call = params.with_option_type(OptionType::Call);
    let intrinsic = call.intrinsic_value();
    if call_price < intrinsic - tolerance {
        return Err(IVError::PriceBelowIntrinsic {
            price: call_price,
            intrinsic,
        });
    }

    let upper_bound = call.upper_bound();
    if call_price > upper_bound + tolerance {
        return Err(IVError::PriceAboveUpperBound {
            price: call_price,
            upper_bound,
        });
    }

    Ok(())
}

/// Solves for implied volatility using a bracketed Newton-Raphson method.
///
/// The Newton-Raphson method iteratively refines the IV estimate using:
/// σ_{n+1} = σ_n - (BS(σ_n) - market_price) / vega(σ_n)
///
/// starting from `config.initial_guess` (clamped into
/// `[min_iv, max_iv]`). Each evaluation moves one end of the bracket to
/// the current iterate. A step that would leave the bracket, or that
/// cannot be taken because vega is at or below `min_vega`, is replaced by
/// the bracket midpoint. The solver stops once a Newton step moves the
/// estimate by at most `tolerance`, or once the bracket is narrower than
/// `tolerance`. A put price is converted to the matching call price,
/// c = p + S - K·e^(-rT), before iterating.
///
/// # Arguments
/// - `params`: Option parameters (spot, strike, time, rate, type)
/// - `market_price`: Observed market price to match
/// - `config`: Solver configuration
///
/// # Returns
/// - `Ok((iv, iterations))`: Converged IV and number of iterations
/// - `Err(IVError)`: If the inputs are invalid, the price violates the
///   no-arbitrage bounds or needs a volatility outside the search range,
///   or the iteration cap is reached
///
/// # Example
/// ```
/// use impliedvol_rs::volatility::{IVParams, SolverConfig, solve_iv};
///
/// let params = IVParams::call(100.0, 100.0, 0.0822, 0.05);
/// let (iv, _) = solve_iv(&params, 1.0, &SolverConfig::default()).unwrap();
/// assert!(iv > 0.0681 && iv < 0.0682);
/// ```
pub fn solve_iv(
    params: &IVParams,
    market_price: f64,
    config: &SolverConfig,
) -> Result<(f64, u32), IVError> {
    validate_params(params)?;
    validate_config(config)?;

    let target = match params.option_type {
        OptionType::Call => market_price,
        OptionType::Put => BlackScholes::parity_call_price(params, market_price),
    };
    check_call_bounds(params, target, config.tolerance)?;

    let mut low = config.min_iv;
    let mut high = config.max_iv;

    let price_low = BlackScholes::call_price(params, low);
    let price_high = BlackScholes::call_price(params, high);
    if target < price_low - config.tolerance || target > price_high + config.tolerance {
        return Err(IVError::VolatilityOutOfBounds {
            volatility: if target < price_low { low } else { high },
            min_bound: low,
            max_bound: high,
        });
    }

    let mut iv = config.initial_guess.clamp(low, high);

    for iteration in 0..config.max_iterations {
        let price = BlackScholes::call_price(params, iv);
        let vega = BlackScholes::vega(params, iv);
        let diff = price - target;

        if diff > 0.0 {
            high = iv;
        } else {
            low = iv;
        }

        let newton = if vega.is_finite() && vega > config.min_vega {
            iv - diff / vega
        } else {
            f64::NAN
        };

        if (low..=high).contains(&newton) {
            trace!(iteration, iv, price, vega, "newton step");
            if (newton - iv).abs() <= config.tolerance {
                return Ok((newton, iteration + 1));
            }
            iv = newton;
        } else {
            trace!(iteration, iv, low, high, "bisection step");
            iv = 0.5 * (low + high);
            if high - low <= config.tolerance {
                return Ok((iv, iteration + 1));
            }
        }
    }

    Err(IVError::ConvergenceFailure {
        iterations: config.max_iterations,
        last_iv: iv,
    })
}
