use chrono::{DateTime, TimeDelta, Utc};

use crate::DataPoint;

/// Earliest instant still inside a trailing window of `lookback_days` ending at `now`.
///
/// Saturates at [`DateTime::<Utc>::MIN_UTC`] if the subtraction would leave the
/// representable range, so an oversized window simply keeps every sample.
#[must_use]
pub fn lookback_cutoff(now: DateTime<Utc>, lookback_days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(TimeDelta::days(i64::from(lookback_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Keep samples with `timestamp >= cutoff`, preserving input order.
///
/// Samples after `now` are not dropped; the window only has a lower bound.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use nesso_core::{DataPoint, filter_lookback, lookback_cutoff};
///
/// fn t(sec: i64) -> DateTime<Utc> { DateTime::from_timestamp(sec, 0).unwrap() }
/// let now = t(10 * 86_400);
/// let pts = vec![DataPoint::new(t(0), 1.0), DataPoint::new(t(8 * 86_400), 2.0)];
/// let kept = filter_lookback(&pts, lookback_cutoff(now, 3));
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].value, 2.0);
/// ```
#[must_use]
pub fn filter_lookback(points: &[DataPoint], cutoff: DateTime<Utc>) -> Vec<&DataPoint> {
    points.iter().filter(|p| p.timestamp >= cutoff).collect()
}
