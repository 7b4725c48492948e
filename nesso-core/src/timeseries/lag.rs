use crate::timeseries::align::AlignedDay;

/// Fewest pairs a lagged candidate needs before a correlation is attempted.
pub const MIN_PAIRS: usize = 2;

/// Equal-length value columns produced by [`apply_lag`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaggedPairs {
    /// Event values, one per pair.
    pub event: Vec<f64>,
    /// Market values, one per pair.
    pub stock: Vec<f64>,
}

impl LaggedPairs {
    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.event.len()
    }

    /// Whether there are no pairs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event.is_empty()
    }

    /// Whether enough pairs remain to attempt a correlation.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.len() >= MIN_PAIRS
    }
}

/// Re-pair an aligned series under a hypothesized offset of `lag` days.
///
/// - `lag == 0`: the series as-is.
/// - `lag > 0` (events lead stocks): `event[i]` with `stock[i + lag]`; the last
///   `lag` rows have no future market value and are dropped.
/// - `lag < 0` (stocks lead events): `event[i + |lag|]` with `stock[i]`; the
///   first `|lag|` event rows have no earlier market value and are dropped.
///
/// Both columns always have equal length. A lag at least as long as the series
/// yields an empty result.
///
/// Offsets are positional: they count aligned rows, which equal calendar days
/// only when the aligned series has no gaps.
#[must_use]
pub fn apply_lag(series: &[AlignedDay], lag: i32) -> LaggedPairs {
    let shift = lag.unsigned_abs() as usize;
    let n = series.len().saturating_sub(shift);

    let (events, stocks) = if lag >= 0 {
        (&series[..n], &series[shift.min(series.len())..])
    } else {
        (&series[shift.min(series.len())..], &series[..n])
    };

    LaggedPairs {
        event: events.iter().map(|d| d.event_value).collect(),
        stock: stocks.iter().map(|d| d.stock_value).collect(),
    }
}
