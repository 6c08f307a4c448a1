//! # Domain Models
//!
//! This crate contains pure domain types for flag-set definitions with minimal
//! dependencies (`serde`, `strum`, `thiserror`).
//! Keep it lean: no I/O, no registries, no bit enumeration; just data and simple helpers.

pub mod definition;
pub mod error;
pub mod host;
pub mod membership;
pub mod nil;
pub mod options;

pub use definition::FlagSetDefinition;
pub use error::DefinitionError;
pub use host::{HostType, StaticHost};
pub use membership::{Membership, RangeConstraint, Setting};
pub use nil::NilHandling;
pub use options::{Options, RawOptions};
