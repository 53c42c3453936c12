//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{parse_walk_date, parse_walk_time, CreateOrderRequest};
pub use response::OrderResponse;
