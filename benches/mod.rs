use criterion::{Criterion, criterion_group, criterion_main};
use impliedvol_rs::prelude::*;
use std::hint::black_box;

fn newton_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("newton");
    let config = SolverConfig::default();

    let atm = IVParams::call(100.0, 100.0, 30.0 / 365.0, 0.05);
    let atm_price = BlackScholes::call_price(&atm, 0.25);
    group.bench_function("atm_call", |b| {
        b.iter(|| solve_iv(black_box(&atm), black_box(atm_price), &config))
    });

    let put = IVParams::put(100.0, 110.0, 0.5, 0.05);
    let put_price = BlackScholes::put_price(&put, 0.3);
    group.bench_function("itm_put_via_parity", |b| {
        b.iter(|| solve_iv(black_box(&put), black_box(put_price), &config))
    });

    group.finish();
}

fn bachelier_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bachelier");

    for (name, strike) in [("near_the_money", 100.5), ("wing", 140.0)] {
        let price = Bachelier::price(100.0, strike, 10.0, 1.0, OptionType::Call);
        group.bench_function(name, |b| {
            b.iter(|| {
                Bachelier::implied_vol_from_forward(
                    black_box(100.0),
                    black_box(strike),
                    1.0,
                    black_box(price),
                    OptionType::Call,
                )
            })
        });
    }

    group.finish();
}

fn batch_benchmarks(c: &mut Criterion) {
    let quotes: Vec<Quote> = (0..1_000)
        .map(|i| {
            let strike = 80.0 + f64::from(i % 40);
            let option_type = if i % 2 == 0 {
                OptionType::Call
            } else {
                OptionType::Put
            };
            let model = if i % 3 == 0 {
                ModelKind::Bachelier
            } else {
                ModelKind::BlackScholes
            };
            let params = IVParams::new(100.0, strike, 60.0 / 365.0, 0.03, option_type);
            let market_price = match model {
                ModelKind::BlackScholes => BlackScholes::price(&params, 0.25),
                ModelKind::Bachelier => {
                    let forward = Bachelier::forward(100.0, 0.03, 60.0 / 365.0);
                    Bachelier::price(forward, strike, 25.0, 60.0 / 365.0, option_type)
                }
            };
            Quote {
                id: i.to_string(),
                underlying_kind: UnderlyingKind::Stock,
                underlying_price: 100.0,
                risk_free_rate: 0.03,
                days_to_expiry: 60.0,
                strike,
                option_type,
                model,
                market_price,
            }
        })
        .collect();

    let config = ValuationConfig::default();
    c.bench_function("value_batch_1000", |b| {
        b.iter(|| value_batch(black_box(&quotes), &config))
    });
}

criterion_group!(
    benches,
    newton_benchmarks,
    bachelier_benchmarks,
    batch_benchmarks
);
criterion_main!(benches);
