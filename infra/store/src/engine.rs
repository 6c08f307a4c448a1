//! In-memory record store.
//!
//! The reference implementation of the persistence collaborator the compiled
//! operation surface is written against: attribute reads that distinguish
//! absence from zero, constraint-checked writes, and generic membership
//! filtering for scope queries. Real deployments substitute their own storage
//! engine behind the same contract.

use crate::error::StoreError;
use fxhash::FxHashMap;
use maskset_domain::{Membership, RangeConstraint};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Opaque identifier of a stored record, unique per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record:{}", self.0)
    }
}

/// The internal shared state of a [`MemoryStore`].
#[derive(Debug, Default)]
struct StoreInner {
    /// Packed attribute values per record; a missing key means the attribute
    /// is absent (nil), which is distinct from storing `0`.
    records: RwLock<BTreeMap<RecordId, FxHashMap<String, u64>>>,
    /// Range constraints enforced on write, keyed by attribute name.
    constraints: RwLock<FxHashMap<String, RangeConstraint>>,
    id_counter: AtomicU64,
}

/// A thread-safe handle to the in-memory store.
///
/// Internally reference-counted and cheap to clone. Records are kept in
/// insertion-id order so filtered results are deterministic. Concurrent
/// writers follow last-write-wins semantics; each mutator is one logical
/// read-modify-write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a range constraint to enforce on every write to `attribute`.
    ///
    /// Re-registering for the same attribute replaces the previous constraint.
    pub fn register_constraint(&self, constraint: RangeConstraint) {
        debug!(
            attribute = constraint.attribute(),
            limit = constraint.limit(),
            "registered range constraint"
        );
        self.inner
            .constraints
            .write()
            .insert(constraint.attribute().to_owned(), constraint);
    }

    /// Creates an empty record; every attribute starts absent.
    pub fn insert(&self) -> RecordId {
        let id = RecordId(self.inner.id_counter.fetch_add(1, Ordering::Relaxed));
        self.inner.records.write().insert(id, FxHashMap::default());
        id
    }

    /// Reads a packed attribute. `None` means the attribute is absent, which
    /// the nil policy, not the store, decides how to interpret.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownRecord`] if the record does not exist.
    pub fn read(&self, id: RecordId, attribute: &str) -> Result<Option<u64>, StoreError> {
        let records = self.inner.records.read();
        let record = records.get(&id).ok_or(StoreError::UnknownRecord { id })?;
        Ok(record.get(attribute).copied())
    }

    /// Writes a packed attribute, enforcing any registered range constraint.
    ///
    /// # Errors
    /// Returns [`StoreError::RangeViolation`] if a registered constraint
    /// rejects the value, [`StoreError::UnknownRecord`] for a missing record.
    pub fn write(&self, id: RecordId, attribute: &str, value: u64) -> Result<(), StoreError> {
        if let Some(constraint) = self.inner.constraints.read().get(attribute)
            && !constraint.permits(value)
        {
            return Err(StoreError::RangeViolation {
                attribute: attribute.to_owned(),
                value,
                limit: constraint.limit(),
            });
        }

        let mut records = self.inner.records.write();
        let record = records.get_mut(&id).ok_or(StoreError::UnknownRecord { id })?;
        record.insert(attribute.to_owned(), value);
        Ok(())
    }

    /// Unsets an attribute, returning the record to the absent state.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownRecord`] if the record does not exist.
    pub fn clear_attribute(&self, id: RecordId, attribute: &str) -> Result<(), StoreError> {
        let mut records = self.inner.records.write();
        let record = records.get_mut(&id).ok_or(StoreError::UnknownRecord { id })?;
        record.remove(attribute);
        Ok(())
    }

    /// Records whose attribute value satisfies the membership predicate, in
    /// insertion-id order. Absent values match only predicates that include
    /// the absent marker.
    #[must_use]
    pub fn filter(&self, attribute: &str, membership: &Membership) -> Vec<RecordId> {
        self.inner
            .records
            .read()
            .iter()
            .filter(|(_, record)| membership.contains(record.get(attribute).copied()))
            .map(|(&id, _)| id)
            .collect()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_distinct_from_zero() {
        let store = MemoryStore::new();
        let id = store.insert();

        assert_eq!(store.read(id, "attribs").unwrap(), None);

        store.write(id, "attribs", 0).unwrap();
        assert_eq!(store.read(id, "attribs").unwrap(), Some(0));

        store.clear_attribute(id, "attribs").unwrap();
        assert_eq!(store.read(id, "attribs").unwrap(), None);
    }

    #[test]
    fn unknown_record_is_an_error() {
        let store = MemoryStore::new();
        let missing = RecordId(42);

        assert!(matches!(
            store.read(missing, "attribs"),
            Err(StoreError::UnknownRecord { .. })
        ));
        assert!(matches!(
            store.write(missing, "attribs", 1),
            Err(StoreError::UnknownRecord { .. })
        ));
        assert!(matches!(
            store.clear_attribute(missing, "attribs"),
            Err(StoreError::UnknownRecord { .. })
        ));
    }
}
