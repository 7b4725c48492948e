/// Magnitudes outside `[SMALL, LARGE]` are rescaled before summing so that
/// squares neither overflow nor underflow.
const LARGE: f64 = 1e100;
const SMALL: f64 = 1e-100;

/// Pearson product-moment correlation coefficient of two equal-length columns.
///
/// Uses the single-pass sums formula
/// `r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²) · (n·Σy² − (Σy)²))`.
///
/// - A column whose values are all equal has zero variance and yields exactly
///   `0.0`: a constant signal has no linear correlation with anything. This is
///   checked on the values themselves, not on the rounded sums.
/// - A column with very large or very small magnitudes is first scaled by a
///   power of two, which is exact and leaves r unchanged.
/// - The result is clamped to `[-1, 1]` to absorb rounding drift.
/// - Columns of different lengths are paired up to the shorter one.
///
/// ```
/// use nesso_core::pearson;
///
/// assert_eq!(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0);
/// assert_eq!(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0);
/// assert_eq!(pearson(&[1.0, 2.0, 3.0], &[0.1, 0.1, 0.1]), 0.0);
/// ```
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len(), "pearson expects equal-length columns");

    let len = x.len().min(y.len());
    let (x, y) = (&x[..len], &y[..len]);
    if is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let (kx, ky) = (rescale_factor(x), rescale_factor(y));

    let mut n = 0.0_f64;
    let (mut sx, mut sy, mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let (a, b) = (a * kx, b * ky);
        n += 1.0;
        sx += a;
        sy += b;
        sxy += a * b;
        sxx += a * a;
        syy += b * b;
    }

    let var_x = n * sxx - sx * sx;
    let var_y = n * syy - sy * sy;
    if !(var_x > 0.0 && var_y > 0.0) {
        return 0.0;
    }

    let denom = (var_x * var_y).sqrt();
    if !(denom > 0.0) || !denom.is_finite() {
        return 0.0;
    }

    ((n * sxy - sx * sy) / denom).clamp(-1.0, 1.0)
}

/// True for columns with fewer than two distinct values.
fn is_constant(col: &[f64]) -> bool {
    col.split_first()
        .is_none_or(|(first, rest)| rest.iter().all(|v| v == first))
}

/// Power of two bringing the column's largest magnitude near 1, or 1 when the
/// column is already in a safe range.
fn rescale_factor(col: &[f64]) -> f64 {
    let max = col.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if !max.is_finite() || max == 0.0 || (SMALL..=LARGE).contains(&max) {
        return 1.0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let exp = max.log2().floor() as i32;
    // Split so neither factor leaves the normal range.
    2.0_f64.powi(-exp / 2) * 2.0_f64.powi(-exp + exp / 2)
}
