use maskset_domain::DefinitionError;
use std::fmt;
use thiserror::Error;

/// Where a generated name lives on the host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodScope {
    Instance,
    Class,
}

/// What a candidate generated name collided with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictSource {
    /// The host framework's own reserved surface.
    HostFramework,
    /// A name already claimed by another attribute on the same host type.
    Attribute(String),
}

impl std::error::Error for ConflictSource {}

impl fmt::Display for ConflictSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostFramework => f.write_str("the host framework"),
            Self::Attribute(attribute) => write!(f, "attribute: {attribute}"),
        }
    }
}

/// A candidate generated name collides with a reserved or already-claimed name.
///
/// Carries enough structured detail to build a deterministic human-readable
/// message: the conflict source, host type, owning attribute, the method name,
/// and whether the conflict is class- or instance-level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "flag set method definition is conflicting: {}method: {method} for attribute: {attribute} \
     in type: {host} is already defined by: {source}",
    scope_prefix(.scope)
)]
pub struct ConflictError {
    pub source: ConflictSource,
    pub host: String,
    pub attribute: String,
    pub method: String,
    pub scope: MethodScope,
}

fn scope_prefix(scope: &MethodScope) -> &'static str {
    match scope {
        MethodScope::Class => "class ",
        MethodScope::Instance => "",
    }
}

/// A dynamic operation was invoked with a flag name that is not part of the
/// compiled flag list. Runtime-only; never raised during compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("flag '{flag}' is not defined for attribute '{attribute}'")]
pub struct UnknownFlagError {
    pub flag: String,
    pub attribute: String,
}

/// The single error type of [`compile`](crate::compile).
///
/// Both kinds are terminal: compilation fails as a whole and no operation
/// surface is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}
