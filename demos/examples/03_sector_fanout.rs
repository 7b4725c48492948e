use nesso::Engine;
use nesso_demos::common::{fixture_now, load_input, summarize};
use nesso_mock::SECTORS;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let now = fixture_now();

    // One blocking task per sector; the engine needs no coordination
    let mut set = tokio::task::JoinSet::new();
    for sector in SECTORS {
        let engine = engine.clone();
        set.spawn_blocking(move || -> Result<String, String> {
            let input = load_input(sector).map_err(|e| e.to_string())?;
            let res = engine
                .correlate_at(&input.event_data, &input.stock_data, &input.params, now)
                .map_err(|e| e.to_string())?;
            Ok(summarize(&input.label, &res))
        });
    }

    let mut lines = Vec::new();
    while let Some(joined) = set.join_next().await {
        lines.push(joined??);
    }
    lines.sort();
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
