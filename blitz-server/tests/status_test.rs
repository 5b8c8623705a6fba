use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use time::macros::datetime;

use blitz_classifier::decision_tree::DecisionTree;
use blitz_classifier::node::Node;
use blitz_classifier::random_forest::{RandomForest, RandomForestType};

use crate::common::mock_app::{MockApp, constant_forest};

mod common;

fn powered_load(power: &serde_json::Value) -> f64 {
    (1..=5)
        .filter(|i| power[format!("Load{i}_Status")] == json!("ON"))
        .map(|i| power[format!("Load{i}_Power")].as_f64().unwrap())
        .sum()
}

#[tokio::test]
async fn test_status_reports_every_load() {
    let app = MockApp::new();

    let (status, body) = app.get_json("/api/status").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        body["status"],
        json!({
            "Load1": "ON",
            "Load2": "OFF",
            "Load3": "ON",
            "Load4": "OFF",
            "Load5": "ON"
        })
    );

    let power = body["power"].as_object().unwrap();
    assert_eq!(power.len(), 10);
    for i in 1..=5 {
        assert!(power[&format!("Load{i}_Power")].is_f64());
        assert_eq!(power[&format!("Load{i}_Status")], body["status"][format!("Load{i}")]);
    }
}

#[tokio::test]
async fn test_status_cost_uses_peak_rate_by_day() {
    let app = MockApp::new();

    let (_, body) = app.get_json("/api/status").await;

    let expected = powered_load(&body["power"]) * 0.20 / 1000.0;
    assert!((body["cost"].as_f64().unwrap() - expected).abs() < 1e-9);
}

#[tokio::test]
async fn test_status_cost_uses_off_peak_rate_at_night() {
    let app = MockApp::new().with_clock(datetime!(2024-06-01 20:00 UTC));

    let (_, body) = app.get_json("/api/status").await;

    let expected = powered_load(&body["power"]) * 0.10 / 1000.0;
    assert!((body["cost"].as_f64().unwrap() - expected).abs() < 1e-9);
}

#[tokio::test]
async fn test_status_costs_nothing_when_all_loads_are_off() {
    let app = MockApp::new().with_classifiers([
        constant_forest(0.0),
        constant_forest(0.0),
        constant_forest(0.0),
        constant_forest(0.0),
        constant_forest(0.0),
    ]);

    let (status, body) = app.get_json("/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cost"], json!(0.0));
}

#[tokio::test]
async fn test_status_prediction_failure_is_internal_error() {
    // Splits on a sixth feature the server never provides.
    let broken = RandomForest::new(
        RandomForestType::Classifier,
        vec![DecisionTree::new(Node::split(5, 0.0, Node::Leaf(0.0), Node::Leaf(1.0)))],
    )
    .unwrap();
    let app = MockApp::new().with_classifiers([
        constant_forest(1.0),
        constant_forest(1.0),
        Arc::new(broken),
        constant_forest(1.0),
        constant_forest(1.0),
    ]);

    let (status, body) = app.get_json("/api/status").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!(500));
    assert!(body["error"]["error_id"].is_string());
}
