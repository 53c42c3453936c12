//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::shared::error::AppError;

/// JSON body extractor that reports malformed bodies as `AppError`.
///
/// Syntax errors, missing fields, wrong types and a missing JSON content
/// type all become 422 responses with a `detail` message.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}
