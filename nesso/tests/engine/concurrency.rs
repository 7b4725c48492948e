use std::sync::Arc;

use crate::helpers::*;
use nesso::{CorrelationResult, Engine};
use nesso_mock::{SECTORS, by_sector};

fn sector_result(engine: &Engine, sector: &str) -> CorrelationResult {
    let fx = by_sector(sector).unwrap();
    engine
        .correlate_at(&fx.events, &fx.stocks, &fx.params, at(90))
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn sectors_in_parallel_match_sequential() {
    let engine = Engine::new();
    let sequential: Vec<CorrelationResult> =
        SECTORS.iter().map(|s| sector_result(&engine, s)).collect();

    let handles: Vec<_> = SECTORS
        .iter()
        .map(|&sector| {
            let engine = engine.clone();
            tokio::task::spawn_blocking(move || sector_result(&engine, sector))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(&sequential) {
        assert_eq!(&handle.await.unwrap(), expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_engine_gives_same_answer_to_every_caller() {
    let engine = Arc::new(Engine::builder().lead_lag_max_lag(10).build().unwrap());
    let expected = sector_result(&engine, "defense");

    let mut set = tokio::task::JoinSet::new();
    for _ in 0..16 {
        let engine = Arc::clone(&engine);
        set.spawn_blocking(move || sector_result(&engine, "defense"));
    }
    while let Some(res) = set.join_next().await {
        assert_eq!(res.unwrap(), expected);
    }
}
