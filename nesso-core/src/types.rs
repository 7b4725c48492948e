//! Re-export of foundational types from `nesso-types`.
// Consolidated re-exports so downstream crates can depend on `nesso-core` only

pub use nesso_types::{CorrelationMethod, CorrelationParams, NessoError};
pub use nesso_types::{CorrelationResult, TimeSeriesEntry};
pub use nesso_types::{DataPoint, Metadata};
pub use nesso_types::{
    DEFAULT_CROSS_CORRELATION_MAX_LAG, DEFAULT_LEAD_LAG_MAX_LAG, DEFAULT_MIN_DATA_POINTS,
    DayBoundary, EngineConfig,
};
