//! Order API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use dog_walking::application::dto::OrderResponse;

use crate::common::{order_body, unique_walker, TestApp};

fn detail(response: &axum_test::TestResponse) -> String {
    let json: Value = response.json();
    json["detail"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_booking_scenario() {
    let app = TestApp::new().await;

    let first = app
        .server
        .post("/orders/")
        .json(&order_body("2024-06-01T08:00:00", "Alice"))
        .await;
    first.assert_status_ok();
    let first: OrderResponse = first.json();
    assert_eq!(first.walker, "Alice");

    let duplicate = app
        .server
        .post("/orders/")
        .json(&order_body("2024-06-01T08:00:00", "Alice"))
        .await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(detail(&duplicate), "Walker is not available at this time");

    let second = app
        .server
        .post("/orders/")
        .json(&order_body("2024-06-01T08:00:00", "Bob"))
        .await;
    second.assert_status_ok();
    let second: OrderResponse = second.json();
    assert!(second.id != first.id);

    let listed = app.server.get("/orders/2024-06-01").await;
    listed.assert_status_ok();
    let listed: Vec<OrderResponse> = listed.json();
    assert_eq!(listed, vec![first, second]);
}

#[tokio::test]
async fn test_create_order_returns_persisted_record() {
    let app = TestApp::new().await;
    let body = json!({
        "apartment_number": 42,
        "dog_name": "Rex",
        "dog_breed": "Beagle",
        "walk_time": "2024-06-02T07:30:00",
        "walker": "Carol"
    });

    let response = app.server.post("/orders/").json(&body).await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert!(json["id"].is_i64());
    assert_eq!(json["apartment_number"], 42);
    assert_eq!(json["dog_name"], "Rex");
    assert_eq!(json["dog_breed"], "Beagle");
    assert_eq!(json["walk_time"], "2024-06-02T07:30:00");
    assert_eq!(json["walker"], "Carol");
}

#[tokio::test]
async fn test_create_order_without_trailing_slash() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders")
        .json(&order_body("2024-06-02T09:00:00", &unique_walker()))
        .await;

    response.assert_status_ok();
}

#[test_case("2024-06-01T06:30:00" ; "before opening")]
#[test_case("2024-06-01T00:00:00" ; "midnight")]
#[test_case("2024-06-01T23:30:00" ; "after closing")]
#[test_case("2024-06-01T23:00:01" ; "one second after closing")]
#[tokio::test]
async fn test_rejects_walk_outside_hours(walk_time: &str) {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders/")
        .json(&order_body(walk_time, &unique_walker()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(detail(&response), "Walk time must be between 7:00 and 23:00");
}

#[test_case("2024-06-01T08:15:00" ; "quarter past")]
#[test_case("2024-06-01T12:01:00" ; "one past")]
#[test_case("2024-06-01T22:45:00" ; "quarter to")]
#[tokio::test]
async fn test_rejects_misaligned_walk(walk_time: &str) {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders/")
        .json(&order_body(walk_time, &unique_walker()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        detail(&response),
        "Walk time must start at the beginning or middle of an hour"
    );
}

#[test_case("2024-06-01T07:00:00" ; "window opens")]
#[test_case("2024-06-01T23:00:00" ; "window closes")]
#[tokio::test]
async fn test_accepts_window_boundaries(walk_time: &str) {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders/")
        .json(&order_body(walk_time, &unique_walker()))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_conflict_ignores_other_fields() {
    let app = TestApp::new().await;
    app.server
        .post("/orders/")
        .json(&json!({
            "apartment_number": 1,
            "dog_name": "Rex",
            "dog_breed": "Beagle",
            "walk_time": "2024-06-03T10:00:00",
            "walker": "Dana"
        }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/orders/")
        .json(&json!({
            "apartment_number": 99,
            "dog_name": "Luna",
            "dog_breed": "Husky",
            "walk_time": "2024-06-03T10:00:00",
            "walker": "Dana"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(detail(&response), "Walker is not available at this time");
}

#[tokio::test]
async fn test_same_walker_different_slot_is_available() {
    let app = TestApp::new().await;
    let walker = unique_walker();

    for walk_time in ["2024-06-03T10:00:00", "2024-06-03T10:30:00", "2024-06-04T10:00:00"] {
        app.server
            .post("/orders/")
            .json(&order_body(walk_time, &walker))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_list_orders_filters_by_date() {
    let app = TestApp::new().await;
    for walk_time in ["2024-06-05T08:00:00", "2024-06-06T08:00:00", "2024-06-05T21:30:00"] {
        app.server
            .post("/orders/")
            .json(&order_body(walk_time, &unique_walker()))
            .await
            .assert_status_ok();
    }

    let response = app.server.get("/orders/2024-06-05").await;

    response.assert_status_ok();
    let orders: Vec<OrderResponse> = response.json();
    let times: Vec<String> = orders
        .iter()
        .map(|o| o.walk_time.format("%H:%M").to_string())
        .collect();
    assert_eq!(times, vec!["08:00", "21:30"]);
}

#[tokio::test]
async fn test_list_orders_empty_day() {
    let app = TestApp::new().await;

    let response = app.server.get("/orders/2030-01-01").await;

    response.assert_status_ok();
    let orders: Vec<OrderResponse> = response.json();
    assert!(orders.is_empty());
}

#[test_case("/orders/2024%2F13%2F40" ; "slashes")]
#[test_case("/orders/2024-13-40" ; "out of range")]
#[test_case("/orders/yesterday" ; "word")]
#[test_case("/orders/24-06-01" ; "two digit year")]
#[test_case("/orders/+2024-06-01" ; "signed year")]
#[test_case("/orders/%202024-06-01" ; "leading space")]
#[tokio::test]
async fn test_list_orders_invalid_date(path: &str) {
    let app = TestApp::new().await;

    let response = app.server.get(path).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(detail(&response), "Invalid date format. Use YYYY-MM-DD");
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders/")
        .json(&json!({
            "apartment_number": 1,
            "dog_name": "Rex",
            "dog_breed": "Beagle",
            "walk_time": "2024-06-01T08:00:00"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!detail(&response).is_empty());
}

#[test_case("next tuesday" ; "prose")]
#[test_case("24-06-01T08:00:00" ; "two digit year")]
#[test_case("2024-06-01T08:00:60" ; "leap second")]
#[tokio::test]
async fn test_unparsable_walk_time_is_unprocessable(walk_time: &str) {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders/")
        .json(&order_body(walk_time, "Alice"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_offset_walk_time_books_wall_clock_slot() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders/")
        .json(&order_body("2024-06-07T08:30+03:00", &unique_walker()))
        .await;

    response.assert_status_ok();
    let order: OrderResponse = response.json();
    assert_eq!(
        order.walk_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "2024-06-07T08:30:00"
    );
}

#[tokio::test]
async fn test_wrong_apartment_type_is_unprocessable() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/orders/")
        .json(&json!({
            "apartment_number": "twelve",
            "dog_name": "Rex",
            "dog_breed": "Beagle",
            "walk_time": "2024-06-01T08:00:00",
            "walker": "Alice"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
