//! HTTP Metrics Middleware
//!
//! Records request counts and latency per route template.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::infrastructure::metrics;

/// Record HTTP metrics for a routed request.
///
/// Installed with `route_layer`, so it only sees requests that matched a
/// route and labels them with the route template, e.g. `/orders/{date}`.
pub async fn track_metrics(matched: MatchedPath, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = matched.as_str().to_owned();

    let response = next.run(req).await;

    metrics::record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
