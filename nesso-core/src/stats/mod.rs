//! Correlation statistics.
//!
//! Modules include:
//! - `pearson`: product-moment correlation with a zero-variance guard
//! - `pvalue`: coarse significance buckets from a t-statistic

pub mod pearson;
pub mod pvalue;
