use nesso::{CorrelationMethod, Engine};
use nesso_demos::common::{DemoInput, fixture_now, leading, load_input, summarize};

#[test]
fn request_body_parses_from_dashboard_json() {
    let body = r#"{
        "label": "manual",
        "eventData": [
            {"timestamp": "2024-01-01T09:00:00Z", "value": 1.0, "metadata": {"source": "feed"}},
            {"timestamp": "2024-01-02T09:00:00Z", "value": 2.0}
        ],
        "stockData": [
            {"timestamp": "2024-01-01T20:00:00Z", "value": 10.0},
            {"timestamp": "2024-01-02T20:00:00Z", "value": 30.0}
        ],
        "params": {"lookbackDays": 30, "method": "leadLag", "maxLag": 3, "minDataPoints": 2}
    }"#;
    let input: DemoInput = serde_json::from_str(body).unwrap();
    assert_eq!(input.event_data.len(), 2);
    assert_eq!(input.params.method, CorrelationMethod::LeadLag);

    let now = "2024-01-03T00:00:00Z".parse().unwrap();
    let res = Engine::new()
        .correlate_at(&input.event_data, &input.stock_data, &input.params, now)
        .unwrap();
    assert_eq!(res.data_points, 2);
}

#[test]
fn summary_names_leader() {
    let input = load_input("defense").unwrap();
    let res = Engine::new()
        .correlate_at(&input.event_data, &input.stock_data, &input.params, fixture_now())
        .unwrap();
    let line = summarize(&input.label, &res);
    assert!(line.starts_with("defense"));
    assert!(line.contains("leadLag"));
    assert!(line.contains("events lead by 4d"));
}

#[test]
fn unknown_sector_is_an_error() {
    assert!(load_input("crypto").is_err());
}

#[test]
fn leading_tolerates_short_input() {
    let input = load_input("defense").unwrap();
    assert_eq!(leading(&input.event_data, 3).len(), 3);

    let short = &input.event_data[..2];
    assert_eq!(leading(short, 3).len(), 2);
    assert!(leading(&[], 3).is_empty());

    let err = Engine::new()
        .correlate_at(leading(short, 3), &input.stock_data, &input.params, fixture_now())
        .unwrap_err();
    assert!(!err.to_string().is_empty());
}
