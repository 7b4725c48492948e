//! Input samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque per-sample annotations supplied by collaborators.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A single timestamped sample of an event-intensity or market series.
///
/// `metadata` is carried for the caller's benefit only; the engine never reads
/// it and it does not appear in any output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Instant the sample was observed.
    pub timestamp: DateTime<Utc>,
    /// Event intensity, or a price/return for market series.
    pub value: f64,
    /// Optional opaque annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl DataPoint {
    /// Create a sample without metadata.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            timestamp,
            value,
            metadata: None,
        }
    }

    /// Attach opaque metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
