use nesso::{CorrelationMethod, CorrelationParams, Engine};
use nesso_mock::scenarios;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let params = CorrelationParams::new(30, CorrelationMethod::Pearson);
    let now = nesso_mock::day(10);

    let (events, stocks) = scenarios::rising_together();
    let res = engine.correlate_at(&events, &stocks, &params, now)?;
    println!("rising together: strength={} lag={} days={}", res.strength, res.lag, res.data_points);

    let (events, stocks) = scenarios::moving_apart();
    let res = engine.correlate_at(&events, &stocks, &params, now)?;
    println!(
        "moving apart:    strength={} signed={:?}",
        res.strength,
        res.signed_correlation()
    );

    // The result is what a dashboard receives
    println!("{}", serde_json::to_string_pretty(&res)?);
    Ok(())
}
