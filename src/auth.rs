//! Bearer token authentication and the middleware that enforces it on every route.

use axum::{
    extract::{FromRef, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error};

/// The only authorization scheme the API accepts.
const BEARER_SCHEME: &str = "Bearer";

/// Check the raw value of an `Authorization` header against `secret`.
///
/// The header must be exactly `Bearer <token>` with a single space, and `token` must equal
/// `secret`. A missing or malformed header is a failed check, never an error.
pub fn authenticate(header: Option<&str>, secret: &str) -> bool {
    let Some(header) = header else {
        return false;
    };

    match header.split_once(' ') {
        Some((scheme, token)) => scheme == BEARER_SCHEME && token == secret,
        None => false,
    }
}

/// The state needed for the auth middleware
#[derive(Debug, Clone)]
pub struct AuthState {
    /// The bearer token clients must present.
    pub api_token: String,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_token: state.api_token.clone(),
        }
    }
}

/// Middleware function that checks for a valid bearer token.
///
/// The request is executed normally if the `Authorization` header holds the configured token,
/// otherwise a 401 response is returned and the request never reaches a route handler.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    // A header that is not valid UTF-8 cannot hold the token.
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !authenticate(header, &state.api_token) {
        tracing::warn!(
            "Rejected {} {}: missing or invalid bearer token",
            request.method(),
            request.uri()
        );
        return Error::Unauthorized.into_response();
    }

    next.run(request).await
}
