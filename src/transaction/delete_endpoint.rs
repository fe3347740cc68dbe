//! Defines the endpoint for deleting a transaction.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    Error,
    transaction::{TransactionState, extract::TransactionIdPath},
};

/// A route handler for deleting a transaction.
///
/// Responds with a confirmation message, or 404 if there is no transaction with the requested ID.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    TransactionIdPath(transaction_id): TransactionIdPath,
) -> Result<Json<Value>, Error> {
    let mut store = state.lock_store()?;
    store.delete(transaction_id)?;

    tracing::info!("Deleted transaction {transaction_id}");

    Ok(Json(json!({
        "message": format!("Transaction {transaction_id} deleted successfully")
    })))
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use serde_json::json;

    use crate::{
        AppState, Error,
        transaction::{
            TransactionState, TransactionStore, delete_endpoint::delete_transaction_endpoint,
            extract::TransactionIdPath,
        },
    };

    fn must_create_state() -> TransactionState {
        let mut store = TransactionStore::new();
        store
            .insert(json!({"amount": 5}).as_object().cloned().unwrap())
            .expect("could not create test transaction");

        TransactionState {
            store: AppState::new("token", store).store,
        }
    }

    #[tokio::test]
    async fn can_delete_transaction() {
        let state = must_create_state();

        let response = delete_transaction_endpoint(State(state.clone()), TransactionIdPath(1))
            .await
            .expect("could not delete transaction")
            .0;

        assert_eq!(
            response,
            json!({"message": "Transaction 1 deleted successfully"})
        );
        assert!(state.store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_transaction_is_not_found() {
        let state = must_create_state();

        let result = delete_transaction_endpoint(State(state.clone()), TransactionIdPath(2)).await;

        assert_eq!(result.map(|json| json.0), Err(Error::NotFound(2)));
        assert_eq!(state.store.lock().unwrap().len(), 1);
    }
}
