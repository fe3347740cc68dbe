//! Defines the endpoints for reading transactions.

use axum::{Json, extract::State};

use crate::{
    Error,
    transaction::{Transaction, TransactionState, extract::TransactionIdPath},
};

/// A route handler for listing every transaction in insertion order.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let store = state.lock_store()?;

    Ok(Json(store.list_all()))
}

/// A route handler for getting a transaction by its ID.
///
/// Responds with 404 if there is no transaction with the requested ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    TransactionIdPath(transaction_id): TransactionIdPath,
) -> Result<Json<Transaction>, Error> {
    let store = state.lock_store()?;

    store
        .get(transaction_id)
        .map(|transaction| Json(transaction.clone()))
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use serde_json::json;

    use crate::{
        AppState, Error,
        transaction::{
            Transaction, TransactionState, TransactionStore, extract::TransactionIdPath,
            get_endpoint::{get_transaction_endpoint, list_transactions_endpoint},
        },
    };

    fn must_create_state(ids: &[i64]) -> TransactionState {
        let seed = ids
            .iter()
            .map(|&id| {
                let fields = json!({"tx_ref": format!("TX{id}")});
                Transaction::new(id, fields.as_object().cloned().unwrap())
            })
            .collect();
        let store = TransactionStore::from_seed(seed).expect("could not create test store");

        TransactionState {
            store: AppState::new("token", store).store,
        }
    }

    #[tokio::test]
    async fn lists_transactions_in_order() {
        let state = must_create_state(&[3, 1, 2]);

        let transactions = list_transactions_endpoint(State(state))
            .await
            .expect("could not list transactions")
            .0;

        let ids: Vec<i64> = transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn gets_transaction_by_id() {
        let state = must_create_state(&[1, 2]);

        let transaction = get_transaction_endpoint(State(state), TransactionIdPath(2))
            .await
            .expect("could not get transaction")
            .0;

        assert_eq!(transaction.id, 2);
        assert_eq!(transaction.fields["tx_ref"], json!("TX2"));
    }

    #[tokio::test]
    async fn get_missing_transaction_is_not_found() {
        let state = must_create_state(&[1]);

        let result = get_transaction_endpoint(State(state), TransactionIdPath(5)).await;

        assert_eq!(result.map(|json| json.0), Err(Error::NotFound(5)));
    }
}
