//! Nesso correlates an event-intensity series with a market series.
//!
//! Overview
//! - Filters both series to a trailing lookback window.
//! - Aligns them onto shared calendar days: events summed per day, the latest
//!   market sample kept per day, unmatched days dropped.
//! - Runs one of three methods over the aligned series and reports strength,
//!   a coarse confidence, the winning lag, and the annotated daily rows.
//!
//! Methods
//! - `pearson`: one correlation at lag 0.
//! - `crossCorrelation`: scans lags `0..=max_lag` (default 14) for the largest
//!   |r|. A positive lag means events lead the market.
//! - `leadLag`: scans `-max_lag..=max_lag` (default 21). A negative lag means
//!   the market leads events.
//!
//! Both lag searches scan in ascending order and keep the first lag on an
//! exact |r| tie.
//!
//! Key behaviors and trade-offs
//! - The p-value is bucketed (0.01, 0.05, 0.10, 0.5) from a t-statistic, not
//!   an exact Student-t probability. Treat `confidence` as a label.
//! - A constant series correlates at 0 rather than failing.
//! - Too little data is always an error, never a zero-confidence result.
//! - The engine holds no mutable state, does no I/O, and never blocks, so
//!   calls may run concurrently on any number of threads.
//!
//! Examples
//! ```
//! use chrono::{DateTime, Utc};
//! use nesso::{CorrelationMethod, CorrelationParams, DataPoint, Engine};
//!
//! fn day(d: i64) -> DateTime<Utc> {
//!     DateTime::from_timestamp(1_704_067_200 + d * 86_400 + 3_600, 0).unwrap()
//! }
//!
//! let events: Vec<DataPoint> = (0..10).map(|d| DataPoint::new(day(d), (d + 1) as f64)).collect();
//! let stocks: Vec<DataPoint> =
//!     (0..10).map(|d| DataPoint::new(day(d), 10.0 * (d + 1) as f64)).collect();
//!
//! let params = CorrelationParams::new(30, CorrelationMethod::Pearson);
//! let result = Engine::new().correlate_at(&events, &stocks, &params, day(10)).unwrap();
//! assert_eq!(result.strength, 1.0);
//! assert_eq!(result.lag, 0);
//! assert_eq!(result.data_points, 10);
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod methods;

pub use core::{Engine, EngineBuilder};

// Re-export core types for convenience
pub use nesso_core::{
    CorrelationMethod, CorrelationParams, CorrelationResult, DataPoint, DayBoundary,
    EngineConfig, Metadata, NessoError, TimeSeriesEntry,
};
pub use nesso_core::{
    DEFAULT_CROSS_CORRELATION_MAX_LAG, DEFAULT_LEAD_LAG_MAX_LAG, DEFAULT_MIN_DATA_POINTS,
};

/// Correlate with a default [`Engine`] and the wall clock.
///
/// Shorthand for `Engine::new().correlate(events, stocks, params)`. Use
/// [`Engine::correlate_at`] for reproducible results.
///
/// # Errors
/// See [`Engine::correlate_at`].
pub fn correlate(
    events: &[DataPoint],
    stocks: &[DataPoint],
    params: &CorrelationParams,
) -> Result<CorrelationResult, NessoError> {
    Engine::new().correlate(events, stocks, params)
}
