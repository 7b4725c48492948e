use nesso::{CorrelationMethod, Engine};
use nesso_demos::common::{fixture_now, leading, load_input, summarize};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,nesso=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let engine = Engine::new();
    let input = load_input("defense")?;

    for method in CorrelationMethod::ALL {
        let mut params = input.params;
        params.method = method;
        let res = engine.correlate_at(&input.event_data, &input.stock_data, &params, fixture_now())?;
        tracing::info!(target: "nesso_demos", "{}", summarize(&input.label, &res));
    }

    // A rejected request logs at debug before the error comes back
    let truncated = leading(&input.event_data, 3);
    if let Err(err) =
        engine.correlate_at(truncated, &input.stock_data, &input.params, fixture_now())
    {
        tracing::warn!(target: "nesso_demos", error = %err, "request rejected");
    }

    Ok(())
}
