//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **OrderService**: Walk booking and lookup by date

pub mod order_service;

pub use order_service::{OrderError, OrderService, OrderServiceImpl};
