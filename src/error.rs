//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::transaction::TransactionId;

/// The message sent to the client when a request fails for an unexpected reason.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request did not carry a valid bearer token.
    #[error("Unauthorized. Provide a valid Bearer token.")]
    Unauthorized,

    /// There is no transaction with the given ID.
    #[error("Transaction {0} not found")]
    NotFound(TransactionId),

    /// The ID segment of the path could not be parsed as an integer.
    #[error("ID must be a number")]
    InvalidId,

    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON in request body")]
    InvalidJson,

    /// The request body was valid JSON but not an object, e.g. an array or a number.
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// The seed data could not be used to build the store, e.g. because two
    /// records share an ID.
    #[error("invalid seed data: {0}")]
    InvalidSeed(String),

    /// The seed data file could not be read.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not read seed data: {0}")]
    SeedIo(String),

    /// A new transaction could not be given an ID because the largest ID in the
    /// store is already the largest representable ID.
    #[error("no transaction IDs left to assign")]
    IdSpaceExhausted,

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLock,
}

impl Error {
    /// The status code for the response to a request that failed with this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            // Everything else, including failures that are not the client's fault, is reported
            // as a bad request.
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = match self {
            Error::Unauthorized
            | Error::NotFound(_)
            | Error::InvalidId
            | Error::InvalidJson
            | Error::NotAnObject => self.to_string(),
            // Any errors that are not handled above are not intended to be shown to the client.
            ref error => {
                tracing::error!("An unexpected error occurred: {error}");
                REQUEST_FAILED_MESSAGE.to_owned()
            }
        };

        error_response(self.status_code(), &message)
    }
}

/// Build a JSON response of the form `{"error": message}`.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
