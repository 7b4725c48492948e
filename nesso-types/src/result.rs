//! Correlation result envelope returned to callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::method::CorrelationMethod;

/// One aligned day annotated with the reported correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesEntry {
    /// Calendar day shared by both series.
    pub date: NaiveDate,
    /// Summed event intensity for the day.
    pub event_value: f64,
    /// Latest market value observed on the day.
    pub stock_value: f64,
    /// Signed correlation of the winning candidate (same on every row).
    pub correlation: f64,
}

/// Outcome of a correlation request.
///
/// `strength` is `|r|`; the sign of `r` is only visible through
/// [`TimeSeriesEntry::correlation`]. `time_series` always covers the original
/// aligned series in ascending date order, never a lag-shifted subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    /// Absolute correlation in `[0, 1]`.
    pub strength: f64,
    /// `1 - p_value`, in `[0, 1]`.
    pub confidence: f64,
    /// Winning lag in days (0 for Pearson).
    pub lag: i32,
    /// Bucketed p-value approximation.
    pub p_value: f64,
    /// Algorithm that produced this result.
    pub method: CorrelationMethod,
    /// Number of aligned days (before any lag truncation).
    pub data_points: usize,
    /// Aligned rows annotated with the signed correlation.
    pub time_series: Vec<TimeSeriesEntry>,
}

impl CorrelationResult {
    /// Signed correlation coefficient, recovered from the annotated rows.
    ///
    /// Returns `None` when `time_series` is empty, which the engine never produces.
    #[must_use]
    pub fn signed_correlation(&self) -> Option<f64> {
        self.time_series.first().map(|row| row.correlation)
    }
}
