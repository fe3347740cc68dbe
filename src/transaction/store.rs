//! The in-memory transaction store.
//!
//! Transactions are indexed two ways: by insertion order, which is what listing returns, and by
//! ID, which is what lookups use. Each record is owned exactly once, by the ID index, and the
//! ordered index refers to it by ID. An edit made through either index is therefore visible
//! through the other without copying.

use std::collections::HashMap;

use crate::{
    Error,
    transaction::core::{Payload, Transaction, TransactionId},
};

/// Holds every transaction in insertion order with O(1) lookup by ID.
///
/// Callers that share the store between requests must wrap it in a single lock, e.g.
/// `Arc<Mutex<TransactionStore>>`, since insert, update and delete touch both indexes.
#[derive(Debug, Default)]
pub struct TransactionStore {
    order: Vec<TransactionId>,
    by_id: HashMap<TransactionId, Transaction>,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from seed data, keeping the order of `transactions`.
    ///
    /// # Errors
    /// Returns [Error::InvalidSeed] if an ID is not positive or appears more than once.
    pub fn from_seed(transactions: Vec<Transaction>) -> Result<Self, Error> {
        let mut store = Self {
            order: Vec::with_capacity(transactions.len()),
            by_id: HashMap::with_capacity(transactions.len()),
        };

        for transaction in transactions {
            let id = transaction.id;

            if id < 1 {
                return Err(Error::InvalidSeed(format!(
                    "transaction ID {id} is not a positive integer"
                )));
            }

            if store.by_id.insert(id, transaction).is_some() {
                return Err(Error::InvalidSeed(format!(
                    "transaction ID {id} appears more than once"
                )));
            }

            store.order.push(id);
        }

        Ok(store)
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Every transaction, in the order it was added.
    pub fn list_all(&self) -> Vec<Transaction> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }

    /// Get the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such transaction.
    pub fn get(&self, id: TransactionId) -> Result<&Transaction, Error> {
        self.by_id.get(&id).ok_or(Error::NotFound(id))
    }

    /// Add a transaction built from `payload`, assigning it the next ID.
    ///
    /// The next ID is one more than the largest ID currently in the store, or 1 if the store is
    /// empty. Any `id` in `payload` is ignored.
    ///
    /// # Errors
    /// Returns [Error::IdSpaceExhausted] if the largest ID is already `i64::MAX`, in
    /// which case the store is left unchanged.
    pub fn insert(&mut self, payload: Payload) -> Result<&Transaction, Error> {
        let id = self.next_id()?;

        self.order.push(id);

        Ok(self
            .by_id
            .entry(id)
            .insert_entry(Transaction::new(id, payload))
            .into_mut())
    }

    /// Merge the fields in `partial` into the transaction with `id`.
    ///
    /// Fields not in `partial` keep their values and the ID never changes.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such transaction, in which case the store is
    /// left unchanged.
    pub fn update(&mut self, id: TransactionId, partial: Payload) -> Result<&Transaction, Error> {
        let transaction = self.by_id.get_mut(&id).ok_or(Error::NotFound(id))?;
        transaction.merge(partial);

        Ok(transaction)
    }

    /// Remove the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such transaction, in which case the store is
    /// left unchanged.
    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let removed = self.by_id.remove(&id).ok_or(Error::NotFound(id))?;
        self.order.retain(|&existing| existing != id);

        Ok(removed)
    }

    fn next_id(&self) -> Result<TransactionId, Error> {
        match self.order.iter().max() {
            Some(max) => max.checked_add(1).ok_or(Error::IdSpaceExhausted),
            None => Ok(1),
        }
    }

    /// Check that both indexes hold the same set of IDs, once each.
    #[cfg(test)]
    fn assert_consistent(&self) {
        use std::collections::HashSet;

        let ordered: HashSet<TransactionId> = self.order.iter().copied().collect();
        let keyed: HashSet<TransactionId> = self.by_id.keys().copied().collect();

        assert_eq!(ordered.len(), self.order.len(), "duplicate ID in order index");
        assert_eq!(ordered, keyed, "order index and ID index disagree");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{
        Error,
        transaction::{Payload, Transaction, TransactionStore},
    };

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().expect("test payload must be an object")
    }

    fn seed(ids: &[i64]) -> Vec<Transaction> {
        ids.iter()
            .map(|&id| Transaction::new(id, payload(json!({"amount": id * 10}))))
            .collect()
    }

    #[test]
    fn insert_into_empty_store_starts_at_one() {
        let mut store = TransactionStore::new();

        let first = store.insert(payload(json!({"amount": 100}))).unwrap().id;
        let second = store.insert(payload(json!({"amount": 200}))).unwrap().id;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        store.assert_consistent();
    }

    #[test]
    fn insert_uses_max_id_plus_one() {
        let mut store = TransactionStore::from_seed(seed(&[5, 2, 9, 3])).unwrap();

        let transaction = store
            .insert(payload(json!({"id": 1, "category": "deposit"})))
            .unwrap();

        assert_eq!(transaction.id, 10);
        assert_eq!(transaction.fields["category"], json!("deposit"));
        store.assert_consistent();
    }

    #[test]
    fn insert_after_deleting_max_reuses_next_id() {
        let mut store = TransactionStore::from_seed(seed(&[1, 2, 3])).unwrap();

        store.delete(3).unwrap();
        let transaction = store.insert(payload(json!({}))).unwrap();

        assert_eq!(transaction.id, 3);
        store.assert_consistent();
    }

    #[test]
    fn list_all_preserves_insertion_order() {
        let mut store = TransactionStore::from_seed(seed(&[4, 1, 7])).unwrap();
        store.insert(payload(json!({}))).unwrap();

        let ids: Vec<i64> = store.list_all().iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![4, 1, 7, 8]);
    }

    #[test]
    fn get_returns_record_or_not_found() {
        let store = TransactionStore::from_seed(seed(&[1, 2])).unwrap();

        assert_eq!(store.get(2).unwrap().fields["amount"], json!(20));
        assert_eq!(store.get(3), Err(Error::NotFound(3)));
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut store = TransactionStore::new();
        store
            .insert(payload(json!({"amount": 100, "category": "transfer"})))
            .unwrap();

        let updated = store
            .update(1, payload(json!({"amount": 200, "id": 5})))
            .unwrap()
            .clone();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.fields["amount"], json!(200));
        assert_eq!(updated.fields["category"], json!("transfer"));
        store.assert_consistent();
    }

    #[test]
    fn update_is_visible_through_listing() {
        let mut store = TransactionStore::from_seed(seed(&[1, 2])).unwrap();

        store.update(2, payload(json!({"amount": 0}))).unwrap();

        assert_eq!(store.list_all()[1].fields["amount"], json!(0));
        assert_eq!(store.get(2).unwrap().fields["amount"], json!(0));
    }

    #[test]
    fn update_missing_id_changes_nothing() {
        let mut store = TransactionStore::from_seed(seed(&[1])).unwrap();
        let before = store.list_all();

        let result = store.update(2, payload(json!({"amount": 1})));

        assert_eq!(result, Err(Error::NotFound(2)));
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = TransactionStore::from_seed(seed(&[1, 2, 3])).unwrap();

        let removed = store.delete(2).unwrap();

        assert_eq!(removed.id, 2);
        assert_eq!(store.get(2), Err(Error::NotFound(2)));
        assert_eq!(store.len(), 2);
        store.assert_consistent();
    }

    #[test]
    fn delete_missing_id_changes_nothing() {
        let mut store = TransactionStore::from_seed(seed(&[1, 2])).unwrap();
        let before = store.list_all();

        assert_eq!(store.delete(3), Err(Error::NotFound(3)));
        assert_eq!(store.list_all(), before);
        store.assert_consistent();
    }

    #[test]
    fn indexes_stay_consistent_across_mixed_operations() {
        let mut store = TransactionStore::from_seed(seed(&[1, 2, 3])).unwrap();

        for step in 0..30_i64 {
            match step % 4 {
                0 | 1 => {
                    store.insert(payload(json!({"step": step}))).unwrap();
                }
                2 => {
                    let _ = store.update(step / 2, payload(json!({"step": step})));
                }
                _ => {
                    let _ = store.delete(step / 3);
                }
            }

            store.assert_consistent();
        }
    }

    #[test]
    fn seed_with_duplicate_ids_is_rejected() {
        let result = TransactionStore::from_seed(seed(&[1, 2, 1]));

        assert!(matches!(result, Err(Error::InvalidSeed(_))));
    }

    #[test]
    fn seed_with_non_positive_id_is_rejected() {
        let result = TransactionStore::from_seed(seed(&[1, 0]));

        assert!(matches!(result, Err(Error::InvalidSeed(_))));
    }

    #[test]
    fn insert_after_largest_possible_id_is_rejected() {
        let largest = Transaction::new(i64::MAX, payload(json!({"amount": 1})));
        let mut store = TransactionStore::from_seed(vec![largest]).unwrap();
        let before = store.list_all();

        let result = store.insert(payload(json!({"amount": 2}))).cloned();

        assert_eq!(result, Err(Error::IdSpaceExhausted));
        assert_eq!(store.list_all(), before);
        store.assert_consistent();

        // The store is still usable after the rejected insert.
        store.update(i64::MAX, payload(json!({"amount": 3}))).unwrap();
        store.delete(i64::MAX).unwrap();
        assert_eq!(store.insert(payload(json!({}))).unwrap().id, 1);
        store.assert_consistent();
    }

    #[test]
    fn empty_seed_gives_empty_store() {
        let store = TransactionStore::from_seed(Vec::new()).unwrap();

        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }
}
