use crate::helpers::*;
use nesso::CorrelationMethod::CrossCorrelation;

#[test]
fn finds_three_day_event_lead() {
    let (events, stocks) = lagged_pair(60, 3, 0xC0FFEE);
    let res = run(&events, &stocks, &params(90, CrossCorrelation).max_lag(14), 60).unwrap();

    assert_eq!(res.lag, 3);
    assert_close(res.strength, 1.0);
    assert_eq!(res.p_value, 0.01);
    assert_eq!(res.method, CrossCorrelation);
}

#[test]
fn reports_original_aligned_length_not_lagged_pairs() {
    let (events, stocks) = lagged_pair(60, 5, 7);
    let res = run(&events, &stocks, &params(90, CrossCorrelation), 60).unwrap();

    assert_eq!(res.lag, 5);
    assert_eq!(res.data_points, 60);
    assert_eq!(res.time_series.len(), 60);
    assert_rows_annotated(&res, res.time_series[0].correlation);
}

#[test]
fn never_searches_negative_lags() {
    // The market leads here, which cross-correlation cannot express
    let (events, stocks) = lagged_pair(60, -4, 99);
    let res = run(&events, &stocks, &params(90, CrossCorrelation), 60).unwrap();
    assert!((0..=14).contains(&res.lag));
    assert!(res.strength < 0.9);
}

#[test]
fn true_lag_beyond_max_lag_is_not_found() {
    let (events, stocks) = lagged_pair(60, 10, 5);
    let res = run(&events, &stocks, &params(90, CrossCorrelation).max_lag(6), 60).unwrap();
    assert!(res.lag <= 6);
    assert!(res.strength < 0.9);
}

#[test]
fn exact_tie_keeps_lowest_lag() {
    // Linear ramps correlate perfectly at every lag
    let (events, stocks) = scenarios::rising_together();
    let res = run(&events, &stocks, &params(30, CrossCorrelation), 10).unwrap();
    assert_eq!(res.lag, 0);
    assert_eq!(res.strength, 1.0);
}

#[test]
fn zero_max_lag_matches_pearson() {
    let (events, stocks) = lagged_pair(40, 2, 17);
    let cross = run(&events, &stocks, &params(60, CrossCorrelation).max_lag(0), 40).unwrap();
    let plain = run(&events, &stocks, &params(60, nesso::CorrelationMethod::Pearson), 40).unwrap();

    assert_eq!(cross.lag, 0);
    assert_eq!(cross.strength, plain.strength);
    assert_eq!(cross.p_value, plain.p_value);
    assert_eq!(cross.time_series, plain.time_series);
}

#[test]
fn sector_fixture_energy_is_inverse_one_day_later() {
    let fx = nesso_mock::by_sector("energy").unwrap();
    let res = run(&fx.events, &fx.stocks, &fx.params, 90).unwrap();
    assert_eq!(res.lag, 1);
    assert!(res.strength > 0.95);
    assert!(res.signed_correlation().unwrap() < 0.0);
}
