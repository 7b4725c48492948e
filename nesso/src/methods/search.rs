use std::ops::RangeInclusive;

use nesso_core::{AlignedDay, apply_lag, approximate_p_value, pearson};

use super::util::Candidate;

/// Inclusive span of candidate lags, scanned in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LagRange {
    lo: i64,
    hi: i64,
}

impl LagRange {
    /// `0..=max_lag`: events leading stocks only.
    pub(crate) const fn forward(max_lag: u32) -> Self {
        Self {
            lo: 0,
            hi: max_lag as i64,
        }
    }

    /// `-max_lag..=max_lag`: either side may lead.
    pub(crate) const fn symmetric(max_lag: u32) -> Self {
        Self {
            lo: -(max_lag as i64),
            hi: max_lag as i64,
        }
    }

    /// Narrow the range to lags that leave at least two pairs on a series of
    /// `len` rows. Lags outside it would be skipped anyway, so the outcome and
    /// the scan order are unchanged.
    fn clamp_to(self, len: usize) -> RangeInclusive<i32> {
        let reach = i64::try_from(len.saturating_sub(2)).unwrap_or(i64::MAX);
        let reach = reach.min(i64::from(i32::MAX));
        let lo = self.lo.max(-reach);
        let hi = self.hi.min(reach);
        // Both bounds now fit in i32.
        let lo = i32::try_from(lo).unwrap_or(0);
        let hi = i32::try_from(hi).unwrap_or(0);
        lo..=hi
    }
}

/// Scan `range` in ascending order and return the lag with the largest |r|.
///
/// Candidates with fewer than two pairs are skipped. On an exact tie in |r| the
/// first lag scanned is kept; later candidates replace it only when strictly
/// larger.
pub(super) fn best_lag(aligned: &[AlignedDay], range: LagRange) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for lag in range.clamp_to(aligned.len()) {
        let pairs = apply_lag(aligned, lag);
        if !pairs.is_usable() {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "nesso::search", lag, pairs = pairs.len(), "skipping lag");
            continue;
        }

        let r = pearson(&pairs.event, &pairs.stock);
        if best.as_ref().is_none_or(|b| r.abs() > b.r.abs()) {
            best = Some(Candidate {
                lag,
                r,
                p_value: approximate_p_value(r, pairs.len()),
            });
        }
    }

    #[cfg(feature = "tracing")]
    if let Some(b) = &best {
        tracing::debug!(
            target: "nesso::search",
            lag = b.lag,
            abs_r = b.r.abs(),
            p_value = b.p_value,
            "lag search finished"
        );
    }

    best
}
