use crate::helpers::*;
use nesso::CorrelationMethod::{CrossCorrelation, LeadLag, Pearson};
use nesso::{DataPoint, NessoError};
use nesso_mock::MockSeries;

#[test]
fn three_days_below_minimum_is_insufficient() {
    let events = MockSeries::daily([1.0, 2.0, 3.0]).points();
    let stocks = MockSeries::daily([10.0, 20.0, 30.0]).points();
    let err = run(&events, &stocks, &params(30, Pearson).min_data_points(5), 3).unwrap_err();

    assert_eq!(err, NessoError::insufficient_data("event series", 5, 3));
    assert!(err.is_data_shortage());
}

#[test]
fn engine_default_minimum_applies() {
    let events = MockSeries::daily([1.0, 2.0, 3.0, 4.0]).points();
    let stocks = MockSeries::daily([1.0, 2.0, 3.0, 4.0]).points();
    let err = run(&events, &stocks, &params(30, Pearson), 4).unwrap_err();
    assert!(matches!(err, NessoError::InsufficientData { required: 5, actual: 4, .. }));

    let lenient = nesso::Engine::builder().default_min_data_points(2).build().unwrap();
    assert!(lenient.correlate_at(&events, &stocks, &params(30, Pearson), at(4)).is_ok());
}

#[test]
fn short_market_series_is_reported_by_name() {
    let events = MockSeries::daily((1..=10).map(f64::from)).points();
    let stocks = MockSeries::daily([1.0, 2.0]).points();
    let err = run(&events, &stocks, &params(30, CrossCorrelation), 10).unwrap_err();
    assert_eq!(err, NessoError::insufficient_data("stock series", 5, 2));
}

#[test]
fn disjoint_days_fail_after_alignment() {
    let events = MockSeries::daily((1..=6).map(f64::from)).points();
    let stocks = MockSeries::daily((1..=6).map(f64::from)).starting(10).points();
    for method in nesso::CorrelationMethod::ALL {
        let err = run(&events, &stocks, &params(30, method), 16).unwrap_err();
        assert_eq!(err, NessoError::insufficient_data("aligned series", 2, 0));
    }
}

#[test]
fn single_shared_day_is_insufficient_even_with_zero_minimum() {
    let events = MockSeries::daily([1.0]).points();
    let stocks = MockSeries::daily([1.0]).points();
    let err = run(&events, &stocks, &params(30, LeadLag).min_data_points(0), 1).unwrap_err();
    assert_eq!(err, NessoError::insufficient_data("aligned series", 2, 1));
}

#[test]
fn lookback_window_drops_old_samples() {
    // Ten daily points, but only the last three fall inside a 3-day window
    let (events, stocks) = scenarios::rising_together();
    let err = run(&events, &stocks, &params(3, Pearson), 10).unwrap_err();
    assert_eq!(err, NessoError::insufficient_data("event series", 5, 3));

    let res = run(&events, &stocks, &params(3, Pearson).min_data_points(3), 10).unwrap();
    assert_eq!(res.data_points, 3);
    assert_eq!(res.time_series[0].date.to_string(), "2024-01-08");
}

#[test]
fn zero_lookback_is_invalid() {
    let (events, stocks) = scenarios::rising_together();
    let err = run(&events, &stocks, &params(0, Pearson), 10).unwrap_err();
    assert!(matches!(err, NessoError::InvalidArg(_)));
}

#[test]
fn non_finite_values_are_rejected() {
    let (mut events, stocks) = scenarios::rising_together();
    events[4] = DataPoint::new(events[4].timestamp, f64::NAN);
    let err = run(&events, &stocks, &params(30, Pearson), 10).unwrap_err();
    assert!(matches!(err, NessoError::InvalidData(ref m) if m.contains("event series")));

    let (events, mut stocks) = scenarios::rising_together();
    stocks[0] = DataPoint::new(stocks[0].timestamp, f64::INFINITY);
    let err = run(&events, &stocks, &params(30, Pearson), 10).unwrap_err();
    assert!(matches!(err, NessoError::InvalidData(ref m) if m.contains("stock series")));
}

#[test]
fn non_finite_value_outside_window_is_ignored() {
    let (mut events, stocks) = scenarios::rising_together();
    events.push(DataPoint::new(day(-100), f64::NAN));
    assert!(run(&events, &stocks, &params(30, Pearson), 10).is_ok());
}

#[test]
fn unknown_method_fails_at_request_parse() {
    let body = r#"{"lookbackDays": 30, "method": "spearman"}"#;
    let err = serde_json::from_str::<nesso::CorrelationParams>(body).unwrap_err();
    assert!(err.to_string().contains("unsupported correlation method"));

    let parsed: Result<nesso::CorrelationMethod, _> = "kendall".parse();
    assert_eq!(parsed, Err(NessoError::unsupported_method("kendall")));
}
