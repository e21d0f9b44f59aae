//! Types for implied volatility calculation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Option type for IV calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

impl OptionType {
    /// Payoff sign: `+1` for calls, `-1` for puts.
    #[must_use]
    pub fn theta(self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

/// Pricing model used to invert the market price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Lognormal dynamics, inverted with Newton-Raphson.
    BlackScholes,
    /// Normal (arithmetic) dynamics, inverted in closed form.
    Bachelier,
}

/// Quote convention of the underlying price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnderlyingKind {
    /// The quoted price is already a spot price.
    Stock,
    /// The quoted price is a futures price and must be discounted to spot.
    Future,
}

/// Error returned when a label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// Name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected label.
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! labelled_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Label used in tabular input and output.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($ty::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

labelled_enum!(OptionType, "option type", { Call => "Call", Put => "Put" });
labelled_enum!(ModelKind, "model", { BlackScholes => "BlackScholes", Bachelier => "Bachelier" });
labelled_enum!(UnderlyingKind, "underlying", { Stock => "Stock", Future => "Future" });

/// Parameters for IV calculation.
///
/// These parameters define the option contract and market conditions
/// needed to calculate implied volatility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IVParams {
    /// Underlying spot price in price units.
    pub spot: f64,
    /// Option strike price in price units.
    pub strike: f64,
    /// Time to expiration in years (e.g., 30 days = 30.0 / 365.0).
    pub time_to_expiry: f64,
    /// Risk-free interest rate (continuously compounded, e.g., 0.05 for 5%).
    pub risk_free_rate: f64,
    /// Option type (Call or Put).
    pub option_type: OptionType,
}

impl IVParams {
    /// Creates new IV parameters.
    ///
    /// # Arguments
    /// - `spot`: Underlying spot price in price units
    /// - `strike`: Option strike price in price units
    /// - `time_to_expiry`: Time to expiration in years
    /// - `risk_free_rate`: Risk-free interest rate (annualized)
    /// - `option_type`: Call or Put
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            option_type,
        }
    }

    /// Creates parameters for a call option.
    #[must_use]
    pub fn call(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Call,
        )
    }

    /// Creates parameters for a put option.
    #[must_use]
    pub fn put(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Put,
        )
    }

    /// Discount factor `e^(-rT)`.
    #[must_use]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Present value of the strike, `K·e^(-rT)`.
    #[must_use]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.discount_factor()
    }

    /// Returns the same contract with the other option side.
    #[must_use]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Lower no-arbitrage bound of the European option value.
    ///
    /// For calls: max(0, S - K·e^(-rT))
    /// For puts: max(0, K·e^(-rT) - S)
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.spot - self.discounted_strike()).max(0.0),
            OptionType::Put => (self.discounted_strike() - self.spot).max(0.0),
        }
    }

    /// Upper no-arbitrage bound of the European option value.
    ///
    /// For calls: S
    /// For puts: K·e^(-rT)
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        match self.option_type {
            OptionType::Call => self.spot,
            OptionType::Put => self.discounted_strike(),
        }
    }
}
