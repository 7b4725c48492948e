//! Time-series utilities used by the correlation engine.
//!
//! Modules include:
//! - `window`: trailing lookback filter
//! - `align`: reduce two irregular series to a shared daily grid
//! - `lag`: re-pair an aligned series under a hypothesized offset
/// Daily alignment of event and market samples.
pub mod align;
/// Lag shifting of aligned series.
pub mod lag;
/// Lookback-window filtering.
pub mod window;
