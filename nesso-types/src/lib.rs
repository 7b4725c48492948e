//! Nesso-specific data transfer objects, request parameters and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod method;
mod params;
mod point;
mod result;

pub use config::{
    DEFAULT_CROSS_CORRELATION_MAX_LAG, DEFAULT_LEAD_LAG_MAX_LAG, DEFAULT_MIN_DATA_POINTS,
    DayBoundary, EngineConfig,
};
pub use error::NessoError;
pub use method::CorrelationMethod;
pub use params::CorrelationParams;
pub use point::{DataPoint, Metadata};
pub use result::{CorrelationResult, TimeSeriesEntry};
