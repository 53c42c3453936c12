//! Order Service
//!
//! Order intake: slot validation, walker availability and persistence,
//! plus lookup of orders by walk date.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{NewOrder, Order, OrderRepository, ScheduleViolation, WalkSchedule};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Order service trait
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Validate and book a new walk
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderError>;

    /// List all walks booked on a calendar date
    async fn list_orders_on(&self, date: NaiveDate) -> Result<Vec<Order>, OrderError>;
}

/// Order service errors
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error(transparent)]
    Schedule(#[from] ScheduleViolation),

    #[error("Walker is not available at this time")]
    WalkerUnavailable,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl OrderError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::Schedule(v) => v.as_str(),
            OrderError::WalkerUnavailable => "walker_unavailable",
            OrderError::Repository(_) => "repository",
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Repository(e) => e,
            e => AppError::BadRequest(e.to_string()),
        }
    }
}

/// OrderService implementation
pub struct OrderServiceImpl<R>
where
    R: OrderRepository,
{
    order_repo: Arc<R>,
}

impl<R> OrderServiceImpl<R>
where
    R: OrderRepository,
{
    pub fn new(order_repo: Arc<R>) -> Self {
        Self { order_repo }
    }

    /// Reject the order unless the walker is free at the requested time.
    ///
    /// This is a plain read before the insert. Two concurrent requests for
    /// the same walker and slot can both pass it.
    async fn ensure_walker_available(&self, order: &NewOrder) -> Result<(), OrderError> {
        let existing = self
            .order_repo
            .find_by_slot(order.walk_time, &order.walker)
            .await?;

        match existing {
            Some(_) => Err(OrderError::WalkerUnavailable),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R> OrderService for OrderServiceImpl<R>
where
    R: OrderRepository + 'static,
{
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderError> {
        let checked = match WalkSchedule::check_slot(order.walk_time) {
            Ok(()) => self.ensure_walker_available(&order).await,
            Err(violation) => Err(OrderError::from(violation)),
        };

        if let Err(e) = checked {
            if !matches!(e, OrderError::Repository(_)) {
                tracing::warn!(
                    walker = %order.walker,
                    walk_time = %order.walk_time,
                    reason = e.reason(),
                    "Order rejected"
                );
                metrics::record_order_rejected(e.reason());
            }
            return Err(e);
        }

        let created = self.order_repo.create(&order).await?;

        tracing::info!(
            order_id = created.id,
            walker = %created.walker,
            walk_time = %created.walk_time,
            "Order created"
        );
        metrics::record_order_created();

        Ok(created)
    }

    async fn list_orders_on(&self, date: NaiveDate) -> Result<Vec<Order>, OrderError> {
        let orders = self.order_repo.find_by_date(date).await?;

        tracing::debug!(%date, count = orders.len(), "Orders listed");

        Ok(orders)
    }
}
