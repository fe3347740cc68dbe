//! Extractors that turn the path and body of a request into a transaction ID and payload.
//!
//! Both reject with [Error] so that a bad ID or body gets the same JSON error response as every
//! other failure, rather than axum's plain text rejections.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;

use crate::{
    Error,
    transaction::{Payload, TransactionId},
};

/// The transaction ID from the `{transaction_id}` segment of the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionIdPath(pub TransactionId);

impl<S> FromRequestParts<S> for TransactionIdPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Could not read transaction ID from path: {rejection}");
                Error::InvalidId
            })?;

        parse_transaction_id(&raw_id).map(Self)
    }
}

/// Parse a path segment as a transaction ID.
///
/// # Errors
/// Returns [Error::InvalidId] if `raw_id` is not an integer.
pub fn parse_transaction_id(raw_id: &str) -> Result<TransactionId, Error> {
    raw_id.parse().map_err(|_| Error::InvalidId)
}

/// A request body holding a JSON object.
///
/// The body is parsed whatever the `Content-Type` header says.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonObject(pub Payload);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Could not read request body: {rejection}");
                Error::InvalidJson
            })?;

        parse_json_object(&body).map(Self)
    }
}

/// Parse `body` as a JSON object.
///
/// # Errors
/// Returns [Error::InvalidJson] if `body` is not JSON, or [Error::NotAnObject] if it is JSON but
/// not an object.
pub fn parse_json_object(body: &[u8]) -> Result<Payload, Error> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(payload)) => Ok(payload),
        Ok(_) => Err(Error::NotAnObject),
        Err(error) => {
            tracing::debug!("Could not parse request body as JSON: {error}");
            Err(Error::InvalidJson)
        }
    }
}
