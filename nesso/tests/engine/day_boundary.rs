use crate::helpers::*;
use nesso::CorrelationMethod::Pearson;
use nesso::{DataPoint, DayBoundary, Engine, EngineConfig};

const N: i64 = 20;

/// Events late in the UTC evening; the market value they belong with is
/// stamped just after the next UTC midnight.
fn late_evening_pairs() -> (Vec<DataPoint>, Vec<DataPoint>) {
    let signal = nesso_mock::noise(77, N as usize);
    let events = (0..N)
        .map(|d| DataPoint::new(day_at(d, 23), signal[d as usize]))
        .collect();
    let stocks = (0..N)
        .map(|d| DataPoint::new(day_at(d + 1, 0), 10.0 * signal[d as usize]))
        .collect();
    (events, stocks)
}

#[test]
fn utc_boundary_splits_evening_from_next_morning() {
    let (events, stocks) = late_evening_pairs();
    let res = Engine::new()
        .correlate_at(&events, &stocks, &params(60, Pearson), at(N + 1))
        .unwrap();
    assert_eq!(res.data_points, (N - 1) as usize);
    assert!(res.strength < 0.9);
}

#[test]
fn fixed_offset_moves_both_onto_the_same_day() {
    let (events, stocks) = late_evening_pairs();
    let engine = Engine::builder()
        .day_boundary(DayBoundary::FixedOffset { seconds: 2 * 3_600 })
        .build()
        .unwrap();
    let res = engine
        .correlate_at(&events, &stocks, &params(60, Pearson), at(N + 1))
        .unwrap();
    assert_eq!(res.data_points, N as usize);
    assert_close(res.strength, 1.0);
    assert_eq!(res.time_series[0].date.to_string(), "2024-01-02");
}

#[test]
fn timezone_from_json_config_uses_local_dates() {
    // 03:00 UTC is the previous evening in New York; 20:00 UTC is mid-afternoon
    let signal = nesso_mock::noise(5, N as usize);
    let events: Vec<DataPoint> = (0..N)
        .map(|d| DataPoint::new(day_at(d + 1, 3), signal[d as usize]))
        .collect();
    let stocks: Vec<DataPoint> = (0..N)
        .map(|d| DataPoint::new(day_at(d, 20), 3.0 * signal[d as usize] + 7.0))
        .collect();

    let cfg: EngineConfig =
        serde_json::from_str(r#"{"dayBoundary":{"timezone":"America/New_York"}}"#).unwrap();
    let engine = Engine::builder().config(cfg).build().unwrap();
    let res = engine
        .correlate_at(&events, &stocks, &params(60, Pearson), at(N + 1))
        .unwrap();
    assert_eq!(res.data_points, N as usize);
    assert_close(res.strength, 1.0);
    assert_eq!(res.time_series[0].date.to_string(), "2024-01-01");

    let utc = Engine::new()
        .correlate_at(&events, &stocks, &params(60, Pearson), at(N + 1))
        .unwrap();
    assert!(utc.strength < 0.9);
}
