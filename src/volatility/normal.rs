//! Standard normal distribution primitives.

use statrs::consts::SQRT_2PI;
use statrs::function::erf::erfc;
use std::f64::consts::FRAC_1_SQRT_2;

/// Standard normal cumulative distribution function (CDF).
///
/// Calculates P(Z ≤ x) where Z is a standard normal random variable.
/// Evaluated through the complementary error function so that the lower
/// tail keeps full relative precision.
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function (PDF).
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

/// Normalised time value of a Bachelier option, `Φ(x) + φ(x)/x`.
///
/// For `x < 0` this maps the half line onto `(-∞, 0)` monotonically and
/// is the function inverted by [`super::Bachelier::implied_vol`].
#[must_use]
pub fn normalised_intrinsic(x: f64) -> f64 {
    norm_cdf(x) + norm_pdf(x) / x
}
