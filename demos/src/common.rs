use std::path::Path;

use chrono::{DateTime, Utc};
use nesso::{CorrelationParams, CorrelationResult, DataPoint};
use serde::Deserialize;

/// Environment variable naming a JSON request file to use instead of fixtures.
pub const INPUT_ENV: &str = "NESSO_DEMO_INPUT";

/// One correlation request as a dashboard route would receive it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoInput {
    /// Label printed with the result.
    #[serde(default)]
    pub label: String,
    /// Event intensity samples.
    pub event_data: Vec<DataPoint>,
    /// Market samples.
    pub stock_data: Vec<DataPoint>,
    /// Request parameters.
    pub params: CorrelationParams,
}

/// Reference instant for fixture data: the day after the last fixture sample.
#[must_use]
pub fn fixture_now() -> DateTime<Utc> {
    nesso_mock::day(90)
}

/// Load the request for `sector`.
///
/// Reads the JSON file named by `NESSO_DEMO_INPUT` when set, otherwise the
/// built-in sector fixture.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if `sector` has
/// no fixture.
pub fn load_input(sector: &str) -> Result<DemoInput, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var(INPUT_ENV) {
        println!("--- (Using request file {path}) ---");
        return read_input(Path::new(&path));
    }
    let fx = nesso_mock::by_sector(sector).ok_or_else(|| format!("no fixture for {sector}"))?;
    Ok(DemoInput {
        label: fx.sector.to_string(),
        event_data: fx.events,
        stock_data: fx.stocks,
        params: fx.params,
    })
}

/// Parse a request file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid request.
pub fn read_input(path: &Path) -> Result<DemoInput, Box<dyn std::error::Error>> {
    let body = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}

/// The first `n` samples, or all of them when there are fewer.
#[must_use]
pub fn leading(points: &[DataPoint], n: usize) -> &[DataPoint] {
    points.get(..n).unwrap_or(points)
}

/// One-line human summary of a result.
#[must_use]
pub fn summarize(label: &str, res: &CorrelationResult) -> String {
    let sign = match res.signed_correlation() {
        Some(r) if r < 0.0 => "-",
        _ => "+",
    };
    let lead = match res.lag {
        0 => "same day".to_string(),
        l if l > 0 => format!("events lead by {l}d"),
        l => format!("market leads by {}d", l.unsigned_abs()),
    };
    format!(
        "{label:<10} {method:<16} r={sign}{strength:.3} p={p:.2} conf={conf:.2} {lead} over {n} days",
        method = res.method.as_str(),
        strength = res.strength,
        p = res.p_value,
        conf = res.confidence,
        n = res.data_points,
    )
}
