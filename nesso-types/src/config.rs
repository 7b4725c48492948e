//! Configuration types shared by the engine and its callers.

use serde::{Deserialize, Serialize};

/// Default minimum number of samples each lookback-filtered series must carry.
pub const DEFAULT_MIN_DATA_POINTS: usize = 5;
/// Default lag search bound for [`CorrelationMethod::CrossCorrelation`](crate::CorrelationMethod::CrossCorrelation).
pub const DEFAULT_CROSS_CORRELATION_MAX_LAG: u32 = 14;
/// Default lag search bound for [`CorrelationMethod::LeadLag`](crate::CorrelationMethod::LeadLag).
pub const DEFAULT_LEAD_LAG_MAX_LAG: u32 = 21;

/// How a timestamp is truncated to the calendar day used for alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayBoundary {
    /// Calendar date of the timestamp in UTC.
    #[default]
    Utc,
    /// Calendar date after applying a fixed offset from UTC.
    FixedOffset {
        /// Offset east of UTC in seconds; must lie strictly within ±86 400.
        seconds: i32,
    },
    /// Local calendar date in an IANA time zone (DST-aware).
    Timezone(chrono_tz::Tz),
}

/// Global configuration for the correlation `Engine`.
///
/// Every field only supplies a default or a convention; none of it is state.
/// Two engines built from equal configurations always produce equal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Minimum samples per series when a request does not set `minDataPoints`.
    pub default_min_data_points: usize,
    /// Lag search bound for cross-correlation when a request does not set `maxLag`.
    pub cross_correlation_max_lag: u32,
    /// Lag search bound for lead/lag when a request does not set `maxLag`.
    pub lead_lag_max_lag: u32,
    /// Calendar-day convention used by the aligner.
    pub day_boundary: DayBoundary,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_min_data_points: DEFAULT_MIN_DATA_POINTS,
            cross_correlation_max_lag: DEFAULT_CROSS_CORRELATION_MAX_LAG,
            lead_lag_max_lag: DEFAULT_LEAD_LAG_MAX_LAG,
            day_boundary: DayBoundary::Utc,
        }
    }
}
