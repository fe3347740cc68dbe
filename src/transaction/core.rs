//! The transaction record and the payload type used to create and edit it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// The fields of a transaction other than its ID, e.g. `amount`, `sender`, `category`.
///
/// The store does not validate the payload beyond requiring a JSON object.
pub type Payload = Map<String, Value>;

/// The name of the field that holds a transaction's ID on the wire.
pub const ID_FIELD: &str = "id";

/// A single mobile money transaction.
///
/// Serializes as one flat JSON object, e.g.
/// `{"id": 1, "amount": 100.0, "category": "transfer", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// Everything else: sender, receiver, amount, fee, balance_after, category, tx_ref,
    /// timestamp, description and any other field a client sent.
    #[serde(flatten)]
    pub fields: Payload,
}

impl Transaction {
    /// Create a transaction with `id` from `payload`.
    ///
    /// Any `id` key in `payload` is dropped, the store owns the ID.
    pub fn new(id: TransactionId, mut payload: Payload) -> Self {
        payload.remove(ID_FIELD);

        Self {
            id,
            fields: payload,
        }
    }

    /// Overwrite the fields present in `partial`, leaving the rest untouched.
    ///
    /// The ID is never changed, even if `partial` contains an `id` key.
    pub fn merge(&mut self, partial: Payload) {
        for (key, value) in partial {
            if key == ID_FIELD {
                continue;
            }

            self.fields.insert(key, value);
        }
    }
}
