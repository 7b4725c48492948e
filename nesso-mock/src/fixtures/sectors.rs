use nesso_core::{CorrelationMethod, CorrelationParams, DataPoint};

use crate::{MockSeries, noise};

/// Sector names with a fixture.
pub const SECTORS: [&str; 3] = ["defense", "health", "energy"];

const DAYS: usize = 90;

/// Synthetic event index and sector basket for one sector.
#[derive(Debug, Clone)]
pub struct SectorFixture {
    /// Sector name.
    pub sector: &'static str,
    /// Event intensity, one sample per day.
    pub events: Vec<DataPoint>,
    /// Sector basket price, one close per day.
    pub stocks: Vec<DataPoint>,
    /// Request a dashboard would send for this sector.
    pub params: CorrelationParams,
}

/// Fixture for `sector`, or `None` for an unknown name.
///
/// - `defense`: conflict events lead the basket by 4 days.
/// - `health`: outbreak reports move with the basket the same day.
/// - `energy`: the basket falls as disruption events rise, a day later.
#[must_use]
pub fn by_sector(sector: &str) -> Option<SectorFixture> {
    match sector {
        "defense" => Some(build(
            "defense",
            11,
            4,
            1.0,
            CorrelationParams::new(120, CorrelationMethod::LeadLag),
        )),
        "health" => Some(build(
            "health",
            23,
            0,
            0.5,
            CorrelationParams::new(120, CorrelationMethod::Pearson),
        )),
        "energy" => Some(build(
            "energy",
            37,
            1,
            -2.0,
            CorrelationParams::new(120, CorrelationMethod::CrossCorrelation).max_lag(7),
        )),
        _ => None,
    }
}

/// Basket price on day `d` is `1000 + scale * signal[d - lead] + jitter[d] / 10`.
fn build(
    sector: &'static str,
    seed: u64,
    lead: usize,
    scale: f64,
    params: CorrelationParams,
) -> SectorFixture {
    let signal = noise(seed, DAYS + lead);
    let jitter = noise(seed.wrapping_mul(31), DAYS);

    let events = MockSeries::daily(signal[lead..].iter().copied())
        .at_hour(8)
        .tagged("sector", sector)
        .points();
    let stocks = MockSeries::daily(
        signal[..DAYS]
            .iter()
            .zip(&jitter)
            .map(|(s, j)| 1_000.0 + scale * s + j / 10.0),
    )
    .at_hour(20)
    .points();

    SectorFixture {
        sector,
        events,
        stocks,
        params,
    }
}
