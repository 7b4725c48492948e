//! Method dispatch over an aligned daily series.

mod pearson;
mod search;
mod util;

use nesso_core::timeseries::lag::MIN_PAIRS;
use nesso_core::{AlignedDay, CorrelationMethod, CorrelationResult, NessoError};

use search::LagRange;

/// Run `method` over `aligned` and assemble the caller-facing result.
///
/// `max_lag` is ignored by [`CorrelationMethod::Pearson`].
pub(crate) fn dispatch(
    aligned: &[AlignedDay],
    method: CorrelationMethod,
    max_lag: u32,
) -> Result<CorrelationResult, NessoError> {
    if aligned.len() < MIN_PAIRS {
        return Err(NessoError::insufficient_data(
            "aligned series",
            MIN_PAIRS,
            aligned.len(),
        ));
    }

    let best = match method {
        CorrelationMethod::Pearson => Some(pearson::unlagged(aligned)),
        CorrelationMethod::CrossCorrelation => {
            search::best_lag(aligned, LagRange::forward(max_lag))
        }
        CorrelationMethod::LeadLag => search::best_lag(aligned, LagRange::symmetric(max_lag)),
    };

    // Lag 0 is in every range and always has enough pairs here.
    let best = best.ok_or_else(|| NessoError::insufficient_data("lagged series", MIN_PAIRS, 0))?;

    Ok(util::assemble(aligned, method, best))
}
