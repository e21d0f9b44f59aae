use approx::assert_abs_diff_eq;
use impliedvol_rs::volatility::{BlackScholes, IVError, IVParams, SolverConfig, solve_iv};

#[test]
fn black_scholes_reference_values() {
    let params = IVParams::call(100.0, 100.0, 0.0822, 0.05);

    let price = BlackScholes::call_price(&params, 0.0681);
    assert!(price > 0.99 && price < 1.01);

    let vega = BlackScholes::vega(&params, 0.0681);
    assert!(vega > 11.1 && vega < 11.2);
}

#[test]
fn newton_reference_value() {
    let params = IVParams::call(100.0, 100.0, 0.0822, 0.05);
    let config = SolverConfig::new().with_tolerance(1e-8).with_max_iterations(100);

    let (iv, _) = solve_iv(&params, 1.0, &config).unwrap();
    assert!(iv > 0.0681 && iv < 0.0682);
}

#[test]
fn put_call_parity_gives_same_volatility() {
    let (spot, strike, time, rate) = (100.0_f64, 100.0_f64, 0.0822_f64, 0.05_f64);
    let call_price = 1.0;
    let put_price = call_price - spot + strike * (-rate * time).exp();

    let config = SolverConfig::default();
    let (call_iv, _) = solve_iv(&IVParams::call(spot, strike, time, rate), call_price, &config)
        .unwrap();
    let (put_iv, _) =
        solve_iv(&IVParams::put(spot, strike, time, rate), put_price, &config).unwrap();

    assert_abs_diff_eq!(call_iv, put_iv, epsilon = 1e-8);
}

#[test]
fn price_then_solve_recovers_volatility_across_grid() {
    let config = SolverConfig::default();
    let (spot, rate) = (100.0, 0.05);
    let mut solved = 0;

    for days in [30, 91, 182, 365, 730] {
        let time = f64::from(days) / 365.0;
        for strike in (80..=130).step_by(5) {
            for sigma in [0.1, 0.15, 0.2, 0.25, 0.35, 0.5, 0.75, 1.0] {
                let params = IVParams::call(spot, f64::from(strike), time, rate);
                // Far from the money the price carries no information about sigma.
                if BlackScholes::vega(&params, sigma) < 1.0 {
                    continue;
                }

                let price = BlackScholes::call_price(&params, sigma);
                let (iv, _) = solve_iv(&params, price, &config).unwrap_or_else(|err| {
                    panic!("t={time:.3} k={strike} sigma={sigma}: {err}")
                });
                assert_abs_diff_eq!(iv, sigma, epsilon = 1e-8);
                solved += 1;
            }
        }
    }

    assert!(solved > 300, "only {solved} grid points had material vega");
}

#[test]
fn recovers_volatility_for_puts_and_other_spots() {
    let config = SolverConfig::default();

    for (time, spot, strike, rate, sigma) in [
        (0.5, 100.0, 90.0, 0.03, 0.3),
        (2.0, 50.0, 60.0, 0.02, 0.4),
        (0.25, 100.0, 100.0, 0.05, 1.5),
        (1.0, 100.0, 120.0, 0.0, 0.6),
    ] {
        let params = IVParams::put(spot, strike, time, rate);
        let price = BlackScholes::put_price(&params, sigma);

        let (iv, _) = solve_iv(&params, price, &config).unwrap();
        assert_abs_diff_eq!(iv, sigma, epsilon = 1e-8);
    }
}

#[test]
fn out_of_bounds_prices_fail() {
    let params = IVParams::call(100.0, 100.0, 0.25, 0.05);
    let config = SolverConfig::default();

    for price in [-1.0, 150.0, f64::NAN] {
        assert!(solve_iv(&params, price, &config).is_err(), "price {price}");
    }
}

#[test]
fn zero_time_value_gives_near_zero_volatility() {
    // An ATM call priced at zero is only matched in the limit sigma -> 0.
    let params = IVParams::call(100.0, 100.0, 0.25, 0.0);
    let (iv, _) = solve_iv(&params, 0.0, &SolverConfig::default()).unwrap();

    assert!((0.0..1e-6).contains(&iv), "iv {iv}");
}

#[test]
fn price_beyond_search_range_is_rejected() {
    let params = IVParams::call(100.0, 100.0, 0.25, 0.05);
    let result = solve_iv(&params, 99.9, &SolverConfig::default());

    assert!(matches!(result, Err(IVError::VolatilityOutOfBounds { .. })));
}
