//! Loads the transactions produced by the ingestion scripts into a new store.

use std::{fs, io::ErrorKind, path::Path};

use crate::{
    Error,
    transaction::{Transaction, TransactionStore},
};

/// Build a [TransactionStore] from the JSON array of transactions at `path`.
///
/// If there is no file at `path`, a warning is logged and an empty store is returned so the API
/// can still be used to create transactions from scratch.
///
/// # Errors
/// Returns [Error::SeedIo] if the file exists but cannot be read, or [Error::InvalidSeed] if it
/// is not a JSON array of transactions with unique, positive IDs.
pub fn load_seed_data(path: &Path) -> Result<TransactionStore, Error> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                "Could not find seed data at {}, starting with no transactions",
                path.display()
            );
            return Ok(TransactionStore::new());
        }
        Err(error) => return Err(Error::SeedIo(format!("{}: {error}", path.display()))),
    };

    let store = TransactionStore::from_seed(parse_seed_data(&text)?)?;
    tracing::info!(
        "Loaded {} transactions from {}",
        store.len(),
        path.display()
    );

    Ok(store)
}

/// Parse `text` as a JSON array of transactions, each with an integer `id`.
///
/// # Errors
/// Returns [Error::InvalidSeed] if `text` is not in that format.
pub fn parse_seed_data(text: &str) -> Result<Vec<Transaction>, Error> {
    serde_json::from_str(text).map_err(|error| Error::InvalidSeed(error.to_string()))
}
