//! Defines the endpoint for partially updating a transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    transaction::{
        Transaction, TransactionState,
        extract::{JsonObject, TransactionIdPath},
    },
};

/// A route handler for merging the fields of a JSON object into an existing transaction.
///
/// Fields missing from the body keep their current values and the ID cannot be changed.
/// Responds with 404 if there is no transaction with the requested ID.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    TransactionIdPath(transaction_id): TransactionIdPath,
    JsonObject(partial): JsonObject,
) -> Result<Json<Transaction>, Error> {
    let mut store = state.lock_store()?;
    let transaction = store.update(transaction_id, partial)?.clone();

    tracing::info!("Updated transaction {transaction_id}");

    Ok(Json(transaction))
}
