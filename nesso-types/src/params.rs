//! Per-request correlation parameters.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::method::CorrelationMethod;

/// Parameters for a single correlation request.
///
/// Optional fields fall back to the engine configuration: `min_data_points`
/// defaults to [`EngineConfig::default_min_data_points`], and `max_lag` to the
/// per-method bound (14 for cross-correlation, 21 for lead/lag). `max_lag` is
/// ignored by [`CorrelationMethod::Pearson`].
///
/// ```
/// use nesso_types::{CorrelationMethod, CorrelationParams};
///
/// let params = CorrelationParams::new(90, CorrelationMethod::LeadLag).max_lag(7);
/// assert_eq!(params.max_lag, Some(7));
/// assert_eq!(params.min_data_points, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationParams {
    /// Trailing window of history, in days, considered before alignment.
    pub lookback_days: u32,
    /// Algorithm to run.
    pub method: CorrelationMethod,
    /// Minimum samples each filtered series must carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_data_points: Option<usize>,
    /// Largest lag magnitude (in days) explored by the lag-search methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lag: Option<u32>,
}

impl CorrelationParams {
    /// Create parameters with engine defaults for every optional field.
    #[must_use]
    pub const fn new(lookback_days: u32, method: CorrelationMethod) -> Self {
        Self {
            lookback_days,
            method,
            min_data_points: None,
            max_lag: None,
        }
    }

    /// Override the minimum number of samples per series.
    #[must_use]
    pub const fn min_data_points(mut self, n: usize) -> Self {
        self.min_data_points = Some(n);
        self
    }

    /// Override the lag search bound.
    #[must_use]
    pub const fn max_lag(mut self, lag: u32) -> Self {
        self.max_lag = Some(lag);
        self
    }

    /// Minimum samples per series after applying configuration defaults.
    #[must_use]
    pub fn effective_min_data_points(&self, cfg: &EngineConfig) -> usize {
        self.min_data_points.unwrap_or(cfg.default_min_data_points)
    }

    /// Lag search bound after applying configuration defaults.
    ///
    /// Always 0 for [`CorrelationMethod::Pearson`].
    #[must_use]
    pub fn effective_max_lag(&self, cfg: &EngineConfig) -> u32 {
        if !self.method.searches_lags() {
            return 0;
        }
        self.max_lag.unwrap_or(match self.method {
            CorrelationMethod::LeadLag => cfg.lead_lag_max_lag,
            _ => cfg.cross_correlation_max_lag,
        })
    }
}
