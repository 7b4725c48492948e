//! Correlation method selector and its wire names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NessoError;

/// Algorithm used to relate an event series to a market series.
///
/// The wire names (`"pearson"`, `"crossCorrelation"`, `"leadLag"`) are the only
/// accepted spellings. Any other name fails to parse with
/// [`NessoError::UnsupportedMethod`], whether it arrives through [`FromStr`],
/// [`TryFrom`], or serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CorrelationMethod {
    /// Plain Pearson correlation over the aligned series; lag is always 0.
    Pearson,
    /// Search lags `0..=maxLag` (events leading stocks).
    CrossCorrelation,
    /// Search lags `-maxLag..=maxLag`; negative means stocks lead events.
    LeadLag,
}

impl CorrelationMethod {
    /// All methods in declaration order.
    pub const ALL: [Self; 3] = [Self::Pearson, Self::CrossCorrelation, Self::LeadLag];

    /// Wire name of this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::CrossCorrelation => "crossCorrelation",
            Self::LeadLag => "leadLag",
        }
    }

    /// Whether this method searches over candidate lags.
    #[must_use]
    pub const fn searches_lags(self) -> bool {
        !matches!(self, Self::Pearson)
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrelationMethod {
    type Err = NessoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| NessoError::unsupported_method(s))
    }
}

impl TryFrom<&str> for CorrelationMethod {
    type Error = NessoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for CorrelationMethod {
    type Error = NessoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CorrelationMethod> for &'static str {
    fn from(m: CorrelationMethod) -> Self {
        m.as_str()
    }
}
