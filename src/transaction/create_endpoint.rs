//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    Error,
    transaction::{Transaction, TransactionState, extract::JsonObject},
};

/// A route handler for creating a new transaction from a JSON object.
///
/// The store assigns the ID, any `id` in the body is ignored. Responds with 201 and the created
/// transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    JsonObject(payload): JsonObject,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let mut store = state.lock_store()?;
    let transaction = store.insert(payload)?.clone();

    tracing::info!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use serde_json::json;

    use crate::{
        AppState,
        transaction::{
            TransactionState, TransactionStore, create_endpoint::create_transaction_endpoint,
            extract::JsonObject,
        },
    };

    #[tokio::test]
    async fn can_create_transaction() {
        let state = TransactionState {
            store: AppState::new("token", TransactionStore::new()).store,
        };
        let body = json!({"amount": 100, "category": "transfer", "id": 77});

        let (status, transaction) = create_transaction_endpoint(
            State(state.clone()),
            JsonObject(body.as_object().cloned().unwrap()),
        )
        .await
        .expect("could not create transaction");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.fields["amount"], json!(100));
        assert_eq!(transaction.fields["category"], json!("transfer"));

        let store = state.store.lock().unwrap();
        assert_eq!(store.get(1).unwrap(), &transaction.0);
    }
}
