//! # Domain Entities
//!
//! Core domain entities. All entities map directly to their corresponding
//! database tables.
//!
//! - **Order**: a booked dog walk (apartment, dog, walker, time slot)
//!
//! Each entity has an associated repository trait defining data access
//! operations, implemented in the infrastructure layer.

mod order;

pub use order::{NewOrder, Order, OrderRepository};

#[cfg(test)]
pub use order::MockOrderRepository;
