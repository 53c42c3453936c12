//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_check() {
    let app = TestApp::new().await;

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "alive");
}

#[tokio::test]
async fn test_readiness_check_reports_database() {
    let app = TestApp::new().await;

    let response = app.server.get("/health/ready").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json: Value = response.json();
    assert!(json["database"]["latency_ms"].is_number());
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_order_counters() {
    let app = TestApp::new().await;
    app.server
        .post("/orders/")
        .json(&crate::common::order_body("2024-06-01T05:00:00", "Metrics"))
        .await;

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    assert!(response.text().contains("dog_walking_orders_rejected_total"));
}

#[tokio::test]
async fn test_metrics_label_requests_by_route_template() {
    let app = TestApp::new().await;
    app.server.get("/orders/2024-06-09").await.assert_status_ok();

    let response = app.server.get("/metrics").await;

    let text = response.text();
    assert!(text.contains("path=\"/orders/{date}\""));
    assert!(!text.contains("path=\"/orders/2024-06-09\""));
}
