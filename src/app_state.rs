//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::transaction::TransactionStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The bearer token clients must present in the `Authorization` header.
    pub api_token: String,

    /// The transaction store, behind the one lock that every store operation takes.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] that takes ownership of `store`.
    pub fn new(api_token: &str, store: TransactionStore) -> Self {
        Self {
            api_token: api_token.to_owned(),
            store: Arc::new(Mutex::new(store)),
        }
    }
}
