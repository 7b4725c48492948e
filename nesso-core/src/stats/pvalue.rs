//! Significance approximation for a correlation coefficient.
//!
//! This is deliberately coarse: the t-statistic is compared against the
//! two-sided normal critical values 2.576 / 1.96 / 1.645 and mapped to one of
//! four fixed p-values. It is not a Student-t CDF and does not account for
//! degrees of freedom beyond the t-statistic itself. Callers wanting exact
//! p-values should treat a real t-distribution as a separate enhancement.

/// `(|t| threshold, p-value)` buckets, checked from most to least significant.
pub const P_VALUE_BUCKETS: [(f64, f64); 3] = [(2.576, 0.01), (1.96, 0.05), (1.645, 0.10)];

/// P-value reported when `|t|` clears no threshold.
pub const P_VALUE_NOT_SIGNIFICANT: f64 = 0.5;

/// t-statistic `r · sqrt((n − 2) / (1 − r²))` for a sample of `n` pairs.
///
/// Returns `None` when `n <= 2` (no degrees of freedom). When `r² >= 1` the
/// statistic is unbounded and `±∞` is returned with the sign of `r`.
#[must_use]
pub fn t_statistic(r: f64, n: usize) -> Option<f64> {
    if n <= 2 {
        return None;
    }
    let one_minus_r2 = 1.0 - r * r;
    if one_minus_r2 <= 0.0 {
        return Some(f64::INFINITY.copysign(r));
    }
    #[allow(clippy::cast_precision_loss)]
    let dof = (n - 2) as f64;
    Some(r * (dof / one_minus_r2).sqrt())
}

/// Bucketed p-value for correlation `r` over `n` pairs.
///
/// `n <= 2` yields `1.0` (no usable signal). Otherwise `|t|` is mapped through
/// [`P_VALUE_BUCKETS`], falling back to [`P_VALUE_NOT_SIGNIFICANT`].
///
/// ```
/// use nesso_core::approximate_p_value;
///
/// assert_eq!(approximate_p_value(0.9, 2), 1.0);
/// assert_eq!(approximate_p_value(1.0, 10), 0.01);
/// assert_eq!(approximate_p_value(0.0, 100), 0.5);
/// ```
#[must_use]
pub fn approximate_p_value(r: f64, n: usize) -> f64 {
    let Some(t) = t_statistic(r, n) else {
        return 1.0;
    };
    let t = t.abs();
    P_VALUE_BUCKETS
        .iter()
        .find(|&&(threshold, _)| t > threshold)
        .map_or(P_VALUE_NOT_SIGNIFICANT, |&(_, p)| p)
}

/// Confidence reported alongside a p-value: `1 − p`.
#[must_use]
pub fn confidence_from_p(p: f64) -> f64 {
    1.0 - p
}
