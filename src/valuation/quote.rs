//! Input record describing one traded option.

use crate::volatility::{IVParams, ModelKind, OptionType, UnderlyingKind};
use serde::{Deserialize, Serialize};

/// One option trade as read from the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Record identifier, carried for diagnostics only.
    pub id: String,
    /// Whether `underlying_price` is a spot or a futures price.
    pub underlying_kind: UnderlyingKind,
    /// Quoted price of the underlying.
    pub underlying_price: f64,
    /// Continuously compounded annual risk-free rate.
    pub risk_free_rate: f64,
    /// Calendar days until expiry.
    pub days_to_expiry: f64,
    /// Option strike.
    pub strike: f64,
    /// Call or Put.
    pub option_type: OptionType,
    /// Model used to invert the market price.
    pub model: ModelKind,
    /// Observed option price.
    pub market_price: f64,
}

impl Quote {
    /// Time to expiry in years, `days_to_expiry / days_per_year`.
    #[must_use]
    pub fn years_to_expiry(&self, days_per_year: f64) -> f64 {
        self.days_to_expiry / days_per_year
    }

    /// Spot price implied by the underlying quote.
    ///
    /// Stock prices are used as is; futures prices are discounted,
    /// `S = F·e^(-rT)`.
    #[must_use]
    pub fn spot(&self, years_to_expiry: f64) -> f64 {
        match self.underlying_kind {
            UnderlyingKind::Stock => self.underlying_price,
            UnderlyingKind::Future => {
                self.underlying_price * (-self.risk_free_rate * years_to_expiry).exp()
            }
        }
    }

    /// Solver parameters for this quote.
    #[must_use]
    pub fn params(&self, days_per_year: f64) -> IVParams {
        let years = self.years_to_expiry(days_per_year);
        IVParams::new(
            self.spot(years),
            self.strike,
            years,
            self.risk_free_rate,
            self.option_type,
        )
    }
}
