//! Deterministic synthetic series for tests and demos.
//!
//! Everything here is seeded and reproducible: the same arguments always build
//! the same points. Days are counted from [`BASE_DAY`] (2024-01-01 UTC).

use chrono::{DateTime, TimeDelta, Utc};
use nesso_core::{DataPoint, Metadata};

mod fixtures;

pub use fixtures::scenarios;
pub use fixtures::sectors::{SECTORS, SectorFixture, by_sector};

/// Unix timestamp of 2024-01-01T00:00:00Z, day 0 for every fixture.
pub const BASE_DAY: i64 = 1_704_067_200;

const SECONDS_PER_DAY: i64 = 86_400;

/// Instant `hour` hours into fixture day `offset`.
#[must_use]
pub fn day_at(offset: i64, hour: u32) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
        + TimeDelta::seconds(BASE_DAY + offset * SECONDS_PER_DAY + i64::from(hour) * 3_600)
}

/// Noon on fixture day `offset`.
#[must_use]
pub fn day(offset: i64) -> DateTime<Utc> {
    day_at(offset, 12)
}

/// `n` pseudo-random integers in `0..1000`, as `f64`, from a xorshift64 stream.
///
/// Integer-valued samples keep sums exact, so fixtures built from them have
/// predictable correlations. A zero seed is remapped to a fixed non-zero one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn noise(seed: u64, n: usize) -> Vec<f64> {
    let mut state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1_000) as f64
        })
        .collect()
}

/// Builder for one daily series: one sample per consecutive day.
#[derive(Debug, Clone, Default)]
pub struct MockSeries {
    values: Vec<f64>,
    start: i64,
    hour: u32,
    metadata: Option<Metadata>,
}

impl MockSeries {
    /// One sample per day for `values`, starting at day 0, noon UTC.
    #[must_use]
    pub fn daily(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            start: 0,
            hour: 12,
            metadata: None,
        }
    }

    /// Shift the first sample to fixture day `offset`.
    #[must_use]
    pub const fn starting(mut self, offset: i64) -> Self {
        self.start = offset;
        self
    }

    /// Hour of day (UTC) at which every sample is stamped.
    #[must_use]
    pub const fn at_hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    /// Attach the same opaque metadata to every sample.
    #[must_use]
    pub fn tagged(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.to_string(), value.into());
        self
    }

    /// Materialize the samples.
    #[must_use]
    pub fn points(&self) -> Vec<DataPoint> {
        self.values
            .iter()
            .zip(self.start..)
            .map(|(&v, d)| {
                let p = DataPoint::new(day_at(d, self.hour), v);
                match &self.metadata {
                    Some(m) => p.with_metadata(m.clone()),
                    None => p,
                }
            })
            .collect()
    }
}

/// Event and market series over the same `n` days where the signal moves
/// `lag` days apart.
///
/// `lag > 0`: events lead the market by `lag` days.
/// `lag < 0`: the market leads events by `|lag|` days.
/// The shared signal is [`noise`] with `seed`, so only the true lag reaches |r| = 1.
#[must_use]
pub fn lagged_pair(n: usize, lag: i32, seed: u64) -> (Vec<DataPoint>, Vec<DataPoint>) {
    let shift = lag.unsigned_abs() as usize;
    let signal = noise(seed, n + shift);
    let (event_skip, stock_skip) = if lag >= 0 { (shift, 0) } else { (0, shift) };

    let events = MockSeries::daily(signal[event_skip..event_skip + n].iter().copied()).points();
    let stocks = MockSeries::daily(signal[stock_skip..stock_skip + n].iter().copied())
        .at_hour(21)
        .points();
    (events, stocks)
}
