//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Order;

/// Order response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub apartment_number: i64,
    pub dog_name: String,
    pub dog_breed: String,
    pub walk_time: NaiveDateTime,
    pub walker: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            apartment_number: order.apartment_number,
            dog_name: order.dog_name,
            dog_breed: order.dog_breed,
            walk_time: order.walk_time,
            walker: order.walker,
        }
    }
}
