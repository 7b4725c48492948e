//! Small hand-checkable inputs with known outcomes.

use nesso_core::DataPoint;

use crate::{MockSeries, day_at};

/// Events `1..=10` against market `10, 20, ..., 100` over ten days: r = +1.
#[must_use]
pub fn rising_together() -> (Vec<DataPoint>, Vec<DataPoint>) {
    let events = MockSeries::daily((1..=10).map(f64::from)).points();
    let stocks = MockSeries::daily((1..=10).map(|v| f64::from(v * 10))).points();
    (events, stocks)
}

/// Events `1..=10` against market `100, 90, ..., 10`: r = -1.
#[must_use]
pub fn moving_apart() -> (Vec<DataPoint>, Vec<DataPoint>) {
    let events = MockSeries::daily((1..=10).map(f64::from)).points();
    let stocks = MockSeries::daily((1..=10).rev().map(|v| f64::from(v * 10))).points();
    (events, stocks)
}

/// Events on days 1..=3, market on days 2..=4: two shared days.
#[must_use]
pub fn partial_overlap() -> (Vec<DataPoint>, Vec<DataPoint>) {
    let events = MockSeries::daily([1.0, 2.0, 3.0]).starting(1).points();
    let stocks = MockSeries::daily([102.0, 103.0, 104.0]).starting(2).points();
    (events, stocks)
}

/// Five days where every event is split across two intraday samples and the
/// market quotes twice a day; only the later quote counts.
///
/// Daily totals are `1..=5` and closing quotes `2, 4, ..., 10`, so r = +1
/// once alignment has summed events and kept the latest quote. The earlier
/// quotes run backwards, so keeping them instead would give r = -1.
#[must_use]
pub fn intraday() -> (Vec<DataPoint>, Vec<DataPoint>) {
    let mut events = Vec::new();
    let mut stocks = Vec::new();
    for d in 0..5_i32 {
        let total = f64::from(d + 1);
        events.push(DataPoint::new(day_at(i64::from(d), 9), total * 0.25));
        events.push(DataPoint::new(day_at(i64::from(d), 15), total * 0.75));
        // Later quote listed first to show order does not matter
        stocks.push(DataPoint::new(day_at(i64::from(d), 16), total * 2.0));
        stocks.push(DataPoint::new(day_at(i64::from(d), 10), f64::from(100 - d)));
    }
    (events, stocks)
}
