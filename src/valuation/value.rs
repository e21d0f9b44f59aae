//! Per-record valuation: derive spot, dispatch on the model, invert.

use super::quote::Quote;
use crate::volatility::{
    Bachelier, IVError, IVParams, ModelKind, OptionType, SolverConfig, solve_iv,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Day count used to turn days to expiry into years (ACT/365).
pub const DEFAULT_DAYS_PER_YEAR: f64 = 365.0;

/// Settings shared by every record of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationConfig {
    /// Newton-Raphson settings for the Black-Scholes branch.
    pub solver: SolverConfig,
    /// Denominator of the year fraction.
    pub days_per_year: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            days_per_year: DEFAULT_DAYS_PER_YEAR,
        }
    }
}

impl ValuationConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the solver settings.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the day count denominator.
    #[must_use]
    pub fn with_days_per_year(mut self, days_per_year: f64) -> Self {
        self.days_per_year = days_per_year;
        self
    }
}

/// Successful valuation of one quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Spot derived from the underlying quote.
    pub spot: f64,
    /// Option strike.
    pub strike: f64,
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: f64,
    /// Time to expiry in years.
    pub years_to_expiry: f64,
    /// Call or Put.
    pub option_type: OptionType,
    /// Model the volatility refers to.
    pub model: ModelKind,
    /// Recovered volatility: lognormal for Black-Scholes, absolute for Bachelier.
    pub implied_volatility: f64,
    /// Observed option price.
    pub market_price: f64,
    /// Newton iterations used; zero for the closed-form Bachelier inversion.
    pub iterations: u32,
}

/// Values a single quote.
///
/// Black-Scholes quotes go through [`solve_iv`] (puts via put-call
/// parity), Bachelier quotes through [`Bachelier::implied_vol`].
///
/// # Errors
/// Returns the [`IVError`] of the selected model when the quote cannot be
/// inverted. The failure is confined to this quote.
pub fn value_quote(quote: &Quote, config: &ValuationConfig) -> Result<Valuation, IVError> {
    if !config.days_per_year.is_finite() || config.days_per_year <= 0.0 {
        return Err(IVError::InvalidParams {
            message: format!(
                "days per year must be positive, got {}",
                config.days_per_year
            ),
        });
    }

    let params: IVParams = quote.params(config.days_per_year);
    debug!(
        id = %quote.id,
        model = %quote.model,
        spot = params.spot,
        years = params.time_to_expiry,
        "valuing quote"
    );

    let (implied_volatility, iterations) = match quote.model {
        ModelKind::BlackScholes => solve_iv(&params, quote.market_price, &config.solver)?,
        ModelKind::Bachelier => (Bachelier::implied_vol(&params, quote.market_price)?, 0),
    };

    Ok(Valuation {
        spot: params.spot,
        strike: params.strike,
        risk_free_rate: params.risk_free_rate,
        years_to_expiry: params.time_to_expiry,
        option_type: params.option_type,
        model: quote.model,
        implied_volatility,
        market_price: quote.market_price,
        iterations,
    })
}
