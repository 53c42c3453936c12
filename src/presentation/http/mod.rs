//! HTTP Interface
//!
//! Router, request handlers and extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
