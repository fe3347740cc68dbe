//! Transaction management for the ledger API.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` record and its payload
//! - The in-memory `TransactionStore` that indexes transactions by order and by ID
//! - Extractors and route handlers for the transaction endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod extract;
mod get_endpoint;
mod state;
mod store;

pub use self::core::{Payload, Transaction, TransactionId};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::{get_transaction_endpoint, list_transactions_endpoint};
pub use state::TransactionState;
pub use store::TransactionStore;
