use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the nesso workspace.
///
/// Every failure is a synchronous validation failure: the engine performs no
/// I/O, so nothing here is transient and nothing is retried internally.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NessoError {
    /// Not enough samples to compute a correlation.
    ///
    /// Raised when a lookback-filtered input series, or the aligned daily series
    /// derived from both inputs, falls below the minimum viable sample count.
    #[error("insufficient data: {what} has {actual} points, need at least {required}")]
    InsufficientData {
        /// Which series was too short (e.g. "event series", "aligned series").
        what: String,
        /// Minimum number of points required.
        required: usize,
        /// Number of points actually available.
        actual: usize,
    },

    /// The requested correlation method is not one of the recognized names.
    #[error("unsupported correlation method: {method:?}")]
    UnsupportedMethod {
        /// The method name as supplied by the caller.
        method: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A sample carries a value the engine cannot use (NaN or infinite).
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl NessoError {
    /// Helper: build an `InsufficientData` error.
    pub fn insufficient_data(what: impl Into<String>, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            what: what.into(),
            required,
            actual,
        }
    }

    /// Helper: build an `UnsupportedMethod` error for the given method name.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Returns true if the failure only reflects a lack of history.
    ///
    /// Callers typically surface these as "not enough history yet" and try
    /// again once more samples have accumulated; every other variant points at
    /// a caller bug and will fail the same way on retry.
    #[must_use]
    pub const fn is_data_shortage(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
