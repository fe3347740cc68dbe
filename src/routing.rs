//! Application router configuration.

use std::any::Any;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::Response,
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    AppState, Error,
    auth::auth_guard,
    endpoints,
    error::{REQUEST_FAILED_MESSAGE, error_response},
    not_found::{get_404_not_found, get_405_method_not_allowed},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every request, including requests for unknown paths, must carry the bearer token before it is
/// routed. A handler that panics gets a 400 response instead of a dropped connection.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_MISSING_ID,
            get(missing_transaction_id)
                .put(missing_transaction_id)
                .delete(missing_transaction_id),
        )
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// `/transactions/` is treated as a single transaction route with an empty ID.
async fn missing_transaction_id() -> Error {
    Error::InvalidId
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic"
    };

    tracing::error!("A request handler panicked: {detail}");

    error_response(StatusCode::BAD_REQUEST, REQUEST_FAILED_MESSAGE)
}
