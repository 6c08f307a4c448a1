use crate::engine::RecordId;
use thiserror::Error;

/// A specialized error enum for store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A write violated the registered range constraint for the attribute.
    #[error("value {value} is out of range for attribute '{attribute}': must be below {limit}")]
    RangeViolation { attribute: String, value: u64, limit: u64 },

    /// The record id does not exist in this store.
    #[error("unknown record: {id}")]
    UnknownRecord { id: RecordId },
}
