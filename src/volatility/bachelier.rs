//! Bachelier (normal) model and closed-form implied normal volatility.
//!
//! The undiscounted Bachelier price is
//!
//! ```text
//! V(F, K, T, σ) = θ·(F − K)·Φ(θ·d) + σ·√T·φ(d),   d = (F − K) / (σ·√T)
//! ```
//!
//! with `θ = +1` for calls and `-1` for puts. Newton iteration on this
//! function is fragile for short-dated near-the-money quotes, so the
//! volatility is recovered directly with Jäckel's rational approximation
//! ("Implied Normal Volatility", 2017): the time value is normalised to
//! `Φ(x) + φ(x)/x`, inverted with one of two fitted rational functions,
//! and polished with a single third-order correction.

use super::error::IVError;
use super::normal::{norm_cdf, norm_pdf, normalised_intrinsic};
use super::solver::validate_params;
use super::types::{IVParams, OptionType};
use statrs::consts::SQRT_2PI;
use tracing::trace;

/// `Φ(x) + φ(x)/x` at `x = -9/4`, where the two rational fits meet.
pub const BRANCH_POINT: f64 = -0.001_882_039_271_918_592;

const FRAC_1_SQRT_2PI: f64 = 1.0 / SQRT_2PI;

/// Bachelier (normal) pricing model and implied volatility.
pub struct Bachelier;

impl Bachelier {
    /// Forward level used by the normal model, `F = S / e^(rT)`.
    #[must_use]
    pub fn forward(spot: f64, rate: f64, time: f64) -> f64 {
        spot / (rate * time).exp()
    }

    /// Undiscounted Bachelier option price.
    ///
    /// `vol` is in absolute price units per √year. With zero time or zero
    /// volatility the option is worth its intrinsic value.
    #[must_use]
    pub fn price(forward: f64, strike: f64, vol: f64, time: f64, option_type: OptionType) -> f64 {
        let theta = option_type.theta();
        let intrinsic = (theta * (forward - strike)).max(0.0);
        if time <= 0.0 || vol <= 0.0 {
            return intrinsic;
        }

        let stddev = vol * time.sqrt();
        let d = (forward - strike) / stddev;
        theta * (forward - strike) * norm_cdf(theta * d) + stddev * norm_pdf(d)
    }

    /// Bachelier vega, `∂V/∂σ = √T·φ(d)`, identical for calls and puts.
    #[must_use]
    pub fn vega(forward: f64, strike: f64, vol: f64, time: f64) -> f64 {
        if time <= 0.0 || vol <= 0.0 {
            return 0.0;
        }

        let sqrt_time = time.sqrt();
        sqrt_time * norm_pdf((forward - strike) / (vol * sqrt_time))
    }

    /// Implied normal volatility of an option quoted against spot.
    ///
    /// The forward is derived with [`Bachelier::forward`] and the market
    /// price is compared against it undiscounted.
    ///
    /// # Errors
    /// Returns [`IVError::InvalidParams`] when spot, strike or time are not
    /// positive, and the errors of [`Bachelier::implied_vol_from_forward`].
    pub fn implied_vol(params: &IVParams, market_price: f64) -> Result<f64, IVError> {
        validate_params(params)?;
        let forward = Self::forward(params.spot, params.risk_free_rate, params.time_to_expiry);
        Self::implied_vol_from_forward(
            forward,
            params.strike,
            params.time_to_expiry,
            market_price,
            params.option_type,
        )
    }

    /// Implied normal volatility from an undiscounted price and a forward.
    ///
    /// A price below intrinsic is rejected rather than inverted: the
    /// textbook closed form uses `|price - intrinsic|`, so it would otherwise
    /// return the volatility of the mirrored price above intrinsic.
    ///
    /// # Errors
    /// - [`IVError::InvalidParams`] if the price is not finite
    /// - [`IVError::PriceBelowIntrinsic`] if the price is below `max(θ(F−K), 0)`
    /// - [`IVError::DegenerateInput`] if the result is not a finite number
    pub fn implied_vol_from_forward(
        forward: f64,
        strike: f64,
        time: f64,
        market_price: f64,
        option_type: OptionType,
    ) -> Result<f64, IVError> {
        if !market_price.is_finite() {
            return Err(IVError::InvalidParams {
                message: format!("market price must be finite, got {market_price}"),
            });
        }

        let intrinsic = (option_type.theta() * (forward - strike)).max(0.0);
        if market_price < intrinsic {
            return Err(IVError::PriceBelowIntrinsic {
                price: market_price,
                intrinsic,
            });
        }

        let sqrt_time = time.sqrt();
        let distance = (strike - forward).abs();

        // At the forward the price collapses to σ·√T/√(2π).
        if distance <= f64::EPSILON * forward.abs().max(strike.abs()) {
            return Ok(market_price * SQRT_2PI / sqrt_time);
        }

        let time_value = market_price - intrinsic;
        if time_value == 0.0 {
            return Ok(0.0);
        }

        let gamma = -time_value / distance;
        let x = Self::inverse_normalised_intrinsic(gamma);
        let vol = distance / (x.abs() * sqrt_time);
        trace!(forward, strike, gamma, x, vol, "bachelier inversion");

        if !vol.is_finite() {
            return Err(IVError::DegenerateInput {
                message: format!(
                    "normalised time value {gamma:e} has no finite inverse (forward {forward}, strike {strike})"
                ),
            });
        }

        Ok(vol)
    }

    /// Solves `Φ(x) + φ(x)/x = gamma` for `x < 0`, given `gamma < 0`.
    #[must_use]
    pub fn inverse_normalised_intrinsic(gamma: f64) -> f64 {
        let x_bar = if gamma < BRANCH_POINT {
            let g = 1.0 / (gamma - 0.5);
            let g2 = g * g;
            let xi = (0.032_114_372_355
                - g2 * (0.016_969_777_977 - g2 * (2.620_733_246_1e-3 - 9.606_695_286_1e-5 * g2)))
                / (1.0 - g2 * (0.663_564_693_8 - g2 * (0.145_287_121_96 - 0.010_472_855_461 * g2)));
            g * (FRAC_1_SQRT_2PI + xi * g2)
        } else {
            let h = (-(-gamma).ln()).sqrt();
            (9.488_340_977_9 - h * (9.632_090_363_5 - h * (0.585_569_973_23 + 2.146_409_335_1 * h)))
                / (1.0 - h * (0.651_748_208_67 + h * (1.512_024_782_8 + 6.643_784_713_2e-5 * h)))
        };

        let q = (normalised_intrinsic(x_bar) - gamma) / norm_pdf(x_bar);
        let x2 = x_bar * x_bar;

        x_bar
            + 3.0 * q * x2 * (2.0 - q * x_bar * (2.0 + x2))
                / (6.0
                    + q * x_bar
                        * (-12.0 + x_bar * (6.0 * q + x_bar * (-6.0 + q * x_bar * (3.0 + x2)))))
    }
}
