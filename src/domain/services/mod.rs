//! # Domain Services
//!
//! Business rules that don't belong to a single entity.
//!
//! - **WalkSchedule**: walking window and half-hour slot validation

mod walk_schedule;

pub use walk_schedule::*;
