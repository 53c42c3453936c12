//! # Domain Layer
//!
//! The domain layer contains the core business rules of the booking service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Order) and repository traits
//! - **services**: Domain services (walk slot rules)

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
