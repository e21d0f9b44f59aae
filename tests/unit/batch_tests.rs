use approx::assert_abs_diff_eq;
use impliedvol_rs::prelude::*;

const TRADES: &str = "\
ID,Underlying Type,Underlying,Risk-Free Rate,Days To Expiry,Strike,Option Type,Model Type,Market Price
1,Stock,100,0.05,30,100,Call,BlackScholes,1.0
2,Stock,100,0.05,30,100,Call,BlackScholes,150.0
3,Future,2500,0.01,91,2450,Put,Bachelier,95.0
4,Stock,100,0.05,0,100,Call,Bachelier,1.0
5,Stock,100,0.05,30,105,Call,BlackScholes,0.25
";

#[test]
fn failed_records_are_skipped_and_others_still_valued() {
    let quotes = read_quotes(TRADES.as_bytes()).unwrap();
    assert_eq!(quotes.len(), 5);

    let outcomes = value_batch(&quotes, &ValuationConfig::default());
    assert_eq!(outcomes.len(), 5);

    let summary = BatchSummary::from_outcomes(&outcomes);
    assert_eq!(summary.converged, 3);
    assert_eq!(summary.domain_failures, 1);
    assert_eq!(summary.degenerate, 1);

    let mut output = Vec::new();
    let written = write_valuations(&mut output, &outcomes).unwrap();
    assert_eq!(written, 3);

    let text = String::from_utf8(output).unwrap();
    let indexes: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(indexes, ["0", "2", "4"]);
}

#[test]
fn output_row_carries_recovered_volatility() {
    let quotes = read_quotes(TRADES.as_bytes()).unwrap();
    let outcomes = value_batch(&quotes[..1], &ValuationConfig::default());

    let mut output = Vec::new();
    write_valuations(&mut output, &outcomes).unwrap();
    let text = String::from_utf8(output).unwrap();
    let row: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();

    assert_eq!(row.len(), 9);
    assert_eq!(row[1], "100");
    assert_eq!(row[5], "Call");
    assert_eq!(row[6], "BlackScholes");
    let iv: f64 = row[7].parse().unwrap();
    assert!(iv > 0.0681 && iv < 0.0682);
    assert_abs_diff_eq!(row[4].parse::<f64>().unwrap(), 30.0 / 365.0, epsilon = 1e-15);
}

#[test]
fn future_spot_is_discounted() {
    let quotes = read_quotes(TRADES.as_bytes()).unwrap();
    let valuation = value_quote(&quotes[2], &ValuationConfig::default()).unwrap();

    let years = 91.0 / 365.0;
    assert_abs_diff_eq!(valuation.spot, 2500.0 * (-0.01f64 * years).exp(), epsilon = 1e-9);
    assert_eq!(valuation.model, ModelKind::Bachelier);
    assert!(valuation.implied_volatility > 0.0);
}

#[test]
fn put_and_call_records_agree_through_parity() {
    let (spot, strike, rate, days) = (100.0_f64, 95.0_f64, 0.03_f64, 45.0_f64);
    let years = days / 365.0;
    let call_price = 6.4;
    let put_price = call_price - spot + strike * (-rate * years).exp();

    let input = format!(
        "header\n\
         c,Stock,{spot},{rate},{days},{strike},Call,BlackScholes,{call_price}\n\
         p,Stock,{spot},{rate},{days},{strike},Put,BlackScholes,{put_price}\n"
    );
    let quotes = read_quotes(input.as_bytes()).unwrap();
    let outcomes = value_batch(&quotes, &ValuationConfig::default());

    let call = outcomes[0].valuation().unwrap().implied_volatility;
    let put = outcomes[1].valuation().unwrap().implied_volatility;
    assert_abs_diff_eq!(call, put, epsilon = 1e-8);
}

#[test]
fn report_records_failure_reasons() {
    let quotes = read_quotes(TRADES.as_bytes()).unwrap();
    let outcomes = value_batch(&quotes, &ValuationConfig::default());

    let package = ValuationReportPackage::new(ValuationReport::from_outcomes(&outcomes)).unwrap();
    let restored = ValuationReportPackage::from_json(&package.to_json().unwrap())
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(restored.valuations.len(), 3);
    assert_eq!(restored.failures.len(), 2);
    assert_eq!(restored.failures[0].id, "2");
    assert_eq!(restored.failures[0].kind, FailureKind::Domain);
    assert_eq!(restored.failures[1].id, "4");
    assert_eq!(restored.failures[1].kind, FailureKind::Degenerate);
}
