//! Repository Implementations
//!
//! SQLite implementations of domain repository traits.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::SqlitePool;
//! use dog_walking::infrastructure::repositories::SqliteOrderRepository;
//!
//! fn setup_repositories(pool: SqlitePool) {
//!     let order_repo = SqliteOrderRepository::new(pool);
//! }
//! ```

pub mod order_repository;

pub use order_repository::SqliteOrderRepository;
