//! Black-Scholes pricing model and vega.
//!
//! This module provides a lightweight implementation of the Black-Scholes
//! option pricing model for use in implied volatility calculations.

use super::normal::{norm_cdf, norm_pdf};
use super::types::{IVParams, OptionType};

/// Black-Scholes pricing model implementation.
///
/// Provides methods for calculating option prices and vega
/// using the Black-Scholes-Merton formula.
pub struct BlackScholes;

impl BlackScholes {
    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    ///
    /// # Arguments
    /// - `spot`: Current underlying price (S)
    /// - `strike`: Option strike price (K)
    /// - `rate`: Risk-free interest rate (r)
    /// - `time`: Time to expiration in years (T)
    /// - `vol`: Volatility (σ)
    ///
    /// # Returns
    /// The d1 parameter value
    #[must_use]
    pub fn d1(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
        let sqrt_time = time.sqrt();
        ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * sqrt_time)
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 - σ√T
    #[must_use]
    pub fn d2(d1: f64, vol: f64, time: f64) -> f64 {
        d1 - vol * time.sqrt()
    }

    /// European call value, C = S·N(d1) - K·e^(-rT)·N(d2).
    ///
    /// The `option_type` of `params` is ignored. With zero time or zero
    /// volatility the option is worth its discounted intrinsic value.
    #[must_use]
    pub fn call_price(params: &IVParams, vol: f64) -> f64 {
        if params.time_to_expiry <= 0.0 {
            return (params.spot - params.strike).max(0.0);
        }

        if vol <= 0.0 {
            return (params.spot - params.discounted_strike()).max(0.0);
        }

        let d1 = Self::d1(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.time_to_expiry,
            vol,
        );
        let d2 = Self::d2(d1, vol, params.time_to_expiry);

        params.spot * norm_cdf(d1) - params.discounted_strike() * norm_cdf(d2)
    }

    /// European put value, P = K·e^(-rT)·N(-d2) - S·N(-d1).
    #[must_use]
    pub fn put_price(params: &IVParams, vol: f64) -> f64 {
        if params.time_to_expiry <= 0.0 {
            return (params.strike - params.spot).max(0.0);
        }

        if vol <= 0.0 {
            return (params.discounted_strike() - params.spot).max(0.0);
        }

        let d1 = Self::d1(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.time_to_expiry,
            vol,
        );
        let d2 = Self::d2(d1, vol, params.time_to_expiry);

        params.discounted_strike() * norm_cdf(-d2) - params.spot * norm_cdf(-d1)
    }

    /// Theoretical price for the side named in `params`.
    #[must_use]
    pub fn price(params: &IVParams, vol: f64) -> f64 {
        match params.option_type {
            OptionType::Call => Self::call_price(params, vol),
            OptionType::Put => Self::put_price(params, vol),
        }
    }

    /// Calculates vega (∂price/∂σ) - sensitivity to volatility.
    ///
    /// Vega = S · N'(d1) · √T
    ///
    /// Vega is the same for calls and puts and strictly positive whenever
    /// time, volatility, spot and strike are positive.
    #[must_use]
    pub fn vega(params: &IVParams, vol: f64) -> f64 {
        if params.time_to_expiry <= 0.0 || vol <= 0.0 {
            return 0.0;
        }

        let d1 = Self::d1(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.time_to_expiry,
            vol,
        );
        params.spot * norm_pdf(d1) * params.time_to_expiry.sqrt()
    }

    /// Converts an observed put price into the call price with the same
    /// strike and expiry, c = p + S - K·e^(-rT).
    #[must_use]
    pub fn parity_call_price(params: &IVParams, put_price: f64) -> f64 {
        put_price + params.spot - params.discounted_strike()
    }
}
