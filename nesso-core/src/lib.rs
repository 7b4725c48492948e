//! nesso-core
//!
//! Leaf algorithms of the nesso correlation engine, plus re-exports of the
//! shared types so downstream crates can depend on `nesso-core` only.
//!
//! - `types`: data model, parameters, configuration, and errors.
//! - `timeseries`: lookback filtering, daily alignment, and lag shifting.
//! - `stats`: Pearson correlation and the bucketed p-value approximation.
//!
//! Purity
//! ------
//! Nothing in this crate performs I/O, holds state across calls, or touches
//! shared mutable data. Every function is a deterministic computation over its
//! arguments, so callers may invoke them from any number of threads at once.
//!
#![warn(missing_docs)]

pub mod stats;
pub mod timeseries;
pub mod types;

pub use stats::pearson::pearson;
pub use stats::pvalue::{approximate_p_value, confidence_from_p, t_statistic};
pub use timeseries::align::{AlignedDay, align_daily, day_of};
pub use timeseries::lag::{LaggedPairs, apply_lag};
pub use timeseries::window::{filter_lookback, lookback_cutoff};
pub use types::*;
