//! Fallback handlers for requests that do not match a route.

use axum::{http::StatusCode, response::Response};

use crate::error::error_response;

/// Respond to a request for a path with no route.
pub async fn get_404_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found. Try /transactions")
}

/// Respond to a request for a known path with a method the path does not support.
pub async fn get_405_method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
