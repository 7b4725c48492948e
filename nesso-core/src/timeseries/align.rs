use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::{DataPoint, DayBoundary};

/// One calendar day present in both the event and the market series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedDay {
    /// Shared calendar day.
    pub date: NaiveDate,
    /// Sum of all event values observed on the day.
    pub event_value: f64,
    /// Market value of the latest sample observed on the day.
    pub stock_value: f64,
}

/// Truncate a timestamp to its calendar day under the given convention.
///
/// - `Utc`: the UTC date, i.e. exactly what the timestamp encodes.
/// - `FixedOffset`: the date after shifting by a constant offset.
/// - `Timezone`: the local date in the zone, honoring DST.
///
/// A fixed offset that would push the instant out of chrono's range falls back
/// to the UTC date.
#[must_use]
pub fn day_of(ts: DateTime<Utc>, boundary: DayBoundary) -> NaiveDate {
    match boundary {
        DayBoundary::Utc => ts.date_naive(),
        DayBoundary::FixedOffset { seconds } => ts
            .naive_utc()
            .checked_add_signed(TimeDelta::seconds(i64::from(seconds)))
            .map_or_else(|| ts.date_naive(), |local| local.date()),
        DayBoundary::Timezone(tz) => ts.with_timezone(&tz).date_naive(),
    }
}

/// Align two irregularly sampled series onto a shared daily grid.
///
/// - Event samples are grouped by day and **summed** (intensity accumulates).
/// - Market samples are grouped by day keeping the value with the **latest**
///   timestamp; on an exact timestamp tie the first sample seen is kept.
/// - Only days present in both groupings survive; nothing is interpolated or
///   carried forward.
/// - Output is sorted by ascending date.
///
/// An empty intersection yields an empty vector; callers decide whether that is
/// an error.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use nesso_core::{DataPoint, DayBoundary, align_daily};
///
/// fn t(sec: i64) -> DateTime<Utc> { DateTime::from_timestamp(sec, 0).unwrap() }
/// const DAY: i64 = 86_400;
///
/// let events = vec![
///     DataPoint::new(t(DAY + 10), 1.0),
///     DataPoint::new(t(DAY + 20), 2.0),
///     DataPoint::new(t(2 * DAY), 5.0),
/// ];
/// let stocks = vec![
///     DataPoint::new(t(DAY + 500), 101.0),
///     DataPoint::new(t(DAY + 100), 100.0),
///     DataPoint::new(t(3 * DAY), 99.0),
/// ];
/// let aligned = align_daily(&events, &stocks, DayBoundary::Utc);
/// assert_eq!(aligned.len(), 1);
/// assert_eq!(aligned[0].event_value, 3.0);
/// assert_eq!(aligned[0].stock_value, 101.0);
/// ```
pub fn align_daily<'a, E, S>(events: E, stocks: S, boundary: DayBoundary) -> Vec<AlignedDay>
where
    E: IntoIterator<Item = &'a DataPoint>,
    S: IntoIterator<Item = &'a DataPoint>,
{
    let mut event_days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for p in events {
        *event_days.entry(day_of(p.timestamp, boundary)).or_insert(0.0) += p.value;
    }

    let mut stock_days: BTreeMap<NaiveDate, (DateTime<Utc>, f64)> = BTreeMap::new();
    for p in stocks {
        match stock_days.entry(day_of(p.timestamp, boundary)) {
            Entry::Vacant(v) => {
                v.insert((p.timestamp, p.value));
            }
            Entry::Occupied(mut o) => {
                if p.timestamp > o.get().0 {
                    o.insert((p.timestamp, p.value));
                }
            }
        }
    }

    let aligned: Vec<AlignedDay> = event_days
        .into_iter()
        .filter_map(|(date, event_value)| {
            stock_days.get(&date).map(|&(_, stock_value)| AlignedDay {
                date,
                event_value,
                stock_value,
            })
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "nesso::align",
        stock_days = stock_days.len(),
        aligned_days = aligned.len(),
        "aligned daily series"
    );

    aligned
}
