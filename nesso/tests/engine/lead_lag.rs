use crate::helpers::*;
use nesso::CorrelationMethod::LeadLag;

#[test]
fn market_leading_by_two_days_is_negative_lag() {
    let (events, stocks) = lagged_pair(60, -2, 0xBEEF);
    let res = run(&events, &stocks, &params(90, LeadLag).max_lag(21), 60).unwrap();

    assert_eq!(res.lag, -2);
    assert_close(res.strength, 1.0);
    assert_eq!(res.method, LeadLag);
}

#[test]
fn events_leading_is_positive_lag() {
    let (events, stocks) = lagged_pair(60, 6, 321);
    let res = run(&events, &stocks, &params(90, LeadLag), 60).unwrap();
    assert_eq!(res.lag, 6);
}

#[test]
fn exact_tie_keeps_most_negative_scanned_lag() {
    // Every lag leaving two or more pairs ties at |r| = 1; the scan starts at
    // the most negative usable lag, -(10 - 2)
    let (events, stocks) = scenarios::rising_together();
    let res = run(&events, &stocks, &params(30, LeadLag), 10).unwrap();
    assert_eq!(res.lag, -8);

    let res = run(&events, &stocks, &params(30, LeadLag).max_lag(3), 10).unwrap();
    assert_eq!(res.lag, -3);
}

#[test]
fn engine_default_bound_applies_without_request_override() {
    let engine = nesso::Engine::builder().lead_lag_max_lag(2).build().unwrap();
    let (events, stocks) = lagged_pair(60, -5, 8);
    let res = engine
        .correlate_at(&events, &stocks, &params(90, LeadLag), at(60))
        .unwrap();
    assert!((-2..=2).contains(&res.lag));

    let res = engine
        .correlate_at(&events, &stocks, &params(90, LeadLag).max_lag(5), at(60))
        .unwrap();
    assert_eq!(res.lag, -5);
}

#[test]
fn sector_fixture_defense_events_lead() {
    let fx = nesso_mock::by_sector("defense").unwrap();
    let res = run(&fx.events, &fx.stocks, &fx.params, 90).unwrap();
    assert_eq!(res.lag, 4);
    assert!(res.strength > 0.95);
}
