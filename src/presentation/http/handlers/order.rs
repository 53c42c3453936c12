//! Order Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::{parse_walk_date, CreateOrderRequest, OrderResponse};
use crate::application::services::{OrderService, OrderServiceImpl};
use crate::infrastructure::repositories::SqliteOrderRepository;
use crate::presentation::http::extractors::ApiJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn order_service(state: &AppState) -> OrderServiceImpl<SqliteOrderRepository> {
    OrderServiceImpl::new(Arc::new(SqliteOrderRepository::new(state.db.clone())))
}

/// Book a new walk
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = order_service(&state).create_order(body.into()).await?;

    Ok(Json(OrderResponse::from(order)))
}

/// List walks booked on a `YYYY-MM-DD` date
pub async fn list_orders(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let date = parse_walk_date(&date)?;

    let orders = order_service(&state).list_orders_on(date).await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
