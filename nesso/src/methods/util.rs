use nesso_core::{
    AlignedDay, CorrelationMethod, CorrelationResult, TimeSeriesEntry, confidence_from_p,
};

/// Statistics of one evaluated lag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) lag: i32,
    pub(crate) r: f64,
    pub(crate) p_value: f64,
}

/// Build the result from the winning candidate.
///
/// `data_points` and `time_series` describe the original aligned series, not
/// the lag-truncated pairs; each row carries the winning signed r.
pub(crate) fn assemble(
    aligned: &[AlignedDay],
    method: CorrelationMethod,
    best: Candidate,
) -> CorrelationResult {
    let time_series = aligned
        .iter()
        .map(|d| TimeSeriesEntry {
            date: d.date,
            event_value: d.event_value,
            stock_value: d.stock_value,
            correlation: best.r,
        })
        .collect();

    CorrelationResult {
        strength: best.r.abs(),
        confidence: confidence_from_p(best.p_value),
        lag: best.lag,
        p_value: best.p_value,
        method,
        data_points: aligned.len(),
        time_series,
    }
}
