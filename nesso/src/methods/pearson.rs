use nesso_core::{AlignedDay, approximate_p_value, pearson};

use super::util::Candidate;

/// Plain Pearson over the full aligned series at lag 0.
pub(super) fn unlagged(aligned: &[AlignedDay]) -> Candidate {
    let event: Vec<f64> = aligned.iter().map(|d| d.event_value).collect();
    let stock: Vec<f64> = aligned.iter().map(|d| d.stock_value).collect();
    let r = pearson(&event, &stock);
    Candidate {
        lag: 0,
        r,
        p_value: approximate_p_value(r, aligned.len()),
    }
}
