//! # Dog Walking Library
//!
//! Booking service for dog walks:
//! - RESTful HTTP API for booking walks and listing them by date
//! - SQLite for persistent storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: Order entity, repository trait, walk slot rules
//! - **Application Layer**: Order intake service and DTOs
//! - **Infrastructure Layer**: Database pool, repositories, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! dog_walking/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits, slot rules
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common error type
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
