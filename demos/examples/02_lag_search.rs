use nesso::{CorrelationMethod, CorrelationParams, Engine};
use nesso_demos::common::summarize;
use nesso_mock::lagged_pair;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let now = nesso_mock::day(60);

    // Events lead the market by three days
    let (events, stocks) = lagged_pair(60, 3, 2024);
    let params = CorrelationParams::new(90, CorrelationMethod::CrossCorrelation).max_lag(14);
    let res = engine.correlate_at(&events, &stocks, &params, now)?;
    println!("{}", summarize("lead +3", &res));

    // The market leads events by two days; only leadLag can see it
    let (events, stocks) = lagged_pair(60, -2, 2024);
    for method in [CorrelationMethod::CrossCorrelation, CorrelationMethod::LeadLag] {
        let params = CorrelationParams::new(90, method);
        let res = engine.correlate_at(&events, &stocks, &params, now)?;
        println!("{}", summarize("lead -2", &res));
    }
    Ok(())
}
