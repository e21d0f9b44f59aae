use approx::assert_relative_eq;
use impliedvol_rs::volatility::{BRANCH_POINT, Bachelier, IVParams, OptionType};

#[test]
fn volatility_is_continuous_across_branch_point() {
    // With F = 100 and K = 110 the normalised time value is -price / 10.
    let (forward, strike, time) = (100.0, 110.0, 1.0);
    let boundary_price = -BRANCH_POINT * (strike - forward);

    let below = Bachelier::implied_vol_from_forward(
        forward,
        strike,
        time,
        boundary_price * (1.0 - 1e-9),
        OptionType::Call,
    )
    .unwrap();
    let above = Bachelier::implied_vol_from_forward(
        forward,
        strike,
        time,
        boundary_price * (1.0 + 1e-9),
        OptionType::Call,
    )
    .unwrap();

    assert!((below - above).abs() < 1e-6, "{below} vs {above}");
}

#[test]
fn inverse_is_continuous_at_branch_point() {
    let inner = Bachelier::inverse_normalised_intrinsic(BRANCH_POINT * (1.0 + 1e-12));
    let outer = Bachelier::inverse_normalised_intrinsic(BRANCH_POINT * (1.0 - 1e-12));

    assert_relative_eq!(inner, -2.25, max_relative = 1e-9);
    assert_relative_eq!(outer, -2.25, max_relative = 1e-9);
}

#[test]
fn spot_quoted_round_trip() {
    let (spot, strike, time, rate, sigma) = (2500.0, 2450.0, 91.0 / 365.0, 0.01, 180.0);
    let forward = Bachelier::forward(spot, rate, time);

    for side in [OptionType::Call, OptionType::Put] {
        let price = Bachelier::price(forward, strike, sigma, time, side);
        let params = IVParams::new(spot, strike, time, rate, side);

        let vol = Bachelier::implied_vol(&params, price).unwrap();
        assert_relative_eq!(vol, sigma, max_relative = 1e-10);
    }
}

#[test]
fn short_dated_near_the_money() {
    let (forward, strike, time, sigma) = (100.0, 100.01, 1.0 / 365.0, 6.0);
    let price = Bachelier::price(forward, strike, sigma, time, OptionType::Call);

    let vol =
        Bachelier::implied_vol_from_forward(forward, strike, time, price, OptionType::Call).unwrap();
    assert_relative_eq!(vol, sigma, max_relative = 1e-10);
}

#[test]
fn at_the_forward_does_not_divide_by_zero() {
    let (spot, time) = (100.0, 0.5);
    let params = IVParams::call(spot, spot, time, 0.0);
    let price = Bachelier::price(spot, spot, 12.0, time, OptionType::Call);

    let vol = Bachelier::implied_vol(&params, price).unwrap();
    assert!(vol.is_finite());
    assert_relative_eq!(vol, 12.0, max_relative = 1e-12);
}
