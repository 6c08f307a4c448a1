//! Flag-set compiler.
//!
//! Compiles a declarative flag-set definition (an ordered list of named
//! boolean flags bound to one integer attribute) into a full behavioral
//! surface: per-flag predicates and mutators, aggregate accessors, and
//! set-membership scopes over the packed bitmask encoding.
//!
//! The compiler validates the definition, derives the bit-to-name mapping,
//! checks every generated name against a per-host-type [`ConflictRegistry`],
//! and returns a [`CompiledFlagSet`] value the host type dispatches through.
//! Compilation is all-or-nothing: on any failure no name is claimed and no
//! operation is usable.
//!
//! ## Example
//!
//! ```rust
//! use maskset_compiler::{compile, ConflictRegistry};
//! use maskset_domain::{RawOptions, StaticHost};
//!
//! # fn main() -> Result<(), maskset_compiler::CompileError> {
//! let host = StaticHost::new("Account");
//! let mut registry = ConflictRegistry::new();
//!
//! let attribs = compile(
//!     &host,
//!     &mut registry,
//!     "attribs",
//!     ["flag", "flag2", "flag3"],
//!     &RawOptions::default(),
//! )?;
//!
//! // 0b101: flag and flag3 enabled
//! assert_eq!(attribs.enabled_flags(Some(5)), vec!["flag", "flag3"]);
//! assert_eq!(attribs.toggle("flag2", Some(5)).unwrap(), 7);
//! # Ok(())
//! # }
//! ```

pub mod bits;
mod engine;
mod error;
mod ops;
mod registry;

pub use engine::{compile, compile_definition};
pub use error::{CompileError, ConflictError, ConflictSource, MethodScope, UnknownFlagError};
pub use ops::{
    AggregateMethodNames, CompiledFlagSet, FlagMethodNames, MethodManifest, SetterInput,
};
pub use registry::ConflictRegistry;
