//! Shared state for the transaction endpoints.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;

use crate::{AppState, Error, transaction::TransactionStore};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store for managing transactions.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

impl TransactionState {
    /// Acquire the store lock.
    ///
    /// # Errors
    /// Returns [Error::StoreLock] if the lock is poisoned.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, TransactionStore>, Error> {
        self.store.lock().map_err(|error| {
            tracing::error!("Could not acquire store lock: {error}");
            Error::StoreLock
        })
    }
}
