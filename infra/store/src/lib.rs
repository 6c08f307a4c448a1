//! # In-memory record store
//!
//! A thread-safe attribute store used as the persistence collaborator for
//! compiled flag sets: nil-aware reads, constraint-enforcing writes, and
//! membership-driven scope queries.

mod engine;
mod error;

pub use self::{
    engine::{MemoryStore, RecordId},
    error::StoreError,
};
