//! Facade crate for the `MaskSet` flag-set toolkit.
//! Re-exports the domain types, the compiler, and the in-memory store.
//! Keep this crate thin: it should compose other crates, not implement flag logic.
//!
//! ## Usage
//! - Compile a definition with [`compiler::compile`] against a host type and
//!   its [`compiler::ConflictRegistry`].
//! - Dispatch reads and mutations through the returned
//!   [`compiler::CompiledFlagSet`]; persist packed values with a store.
//!
//! ```rust
//! use maskset::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let host = StaticHost::new("Account");
//! let mut registry = ConflictRegistry::new();
//! let attribs = compile(&host, &mut registry, "attribs", ["flag", "flag2"], &RawOptions::default())?;
//!
//! let store = MemoryStore::new();
//! let id = store.insert();
//! let next = attribs.enable("flag2", store.read(id, "attribs")?)?;
//! store.write(id, "attribs", next)?;
//!
//! assert_eq!(attribs.enabled_flags(store.read(id, "attribs")?), vec!["flag2"]);
//! # Ok(())
//! # }
//! ```

pub use maskset_compiler as compiler;
pub use maskset_domain as domain;
pub use maskset_store as store;

pub mod prelude {
    pub use maskset_compiler::{
        CompileError, CompiledFlagSet, ConflictRegistry, SetterInput, compile,
    };
    pub use maskset_domain::{
        FlagSetDefinition, HostType, Membership, NilHandling, RawOptions, Setting, StaticHost,
    };
    pub use maskset_store::{MemoryStore, RecordId, StoreError};
}
