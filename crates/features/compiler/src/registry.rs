//! Per-host-type reservation registry for generated method names.
//!
//! The registry is an explicit object owned by whoever defines the host type:
//! created once, written during compilation, read-only afterward. During a
//! single compilation, claims are staged in a [`ClaimSet`] and committed only
//! when the whole flag-set compiled; a failed compilation leaves the registry
//! untouched.

use crate::error::{ConflictError, ConflictSource, MethodScope};
use fxhash::FxHashMap;
use maskset_domain::HostType;

/// Claimed generated names for one host type, mapped to the owning attribute.
///
/// A name, once claimed, is never reassigned; a second claim attempt is
/// always a conflict. Instance-level and class-level names live in separate
/// namespaces, mirroring the host's own method surfaces.
#[derive(Debug, Default)]
pub struct ConflictRegistry {
    instance: FxHashMap<String, String>,
    class: FxHashMap<String, String>,
}

impl ConflictRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The attribute owning an instance-level name, if claimed.
    #[must_use]
    pub fn instance_owner(&self, name: &str) -> Option<&str> {
        self.instance.get(name).map(String::as_str)
    }

    /// The attribute owning a class-level name, if claimed.
    #[must_use]
    pub fn class_owner(&self, name: &str) -> Option<&str> {
        self.class.get(name).map(String::as_str)
    }

    /// Total number of claimed names across both surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instance.len() + self.class.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instance.is_empty() && self.class.is_empty()
    }

    /// Records every staged claim. Called by the compiler after all emissions
    /// succeeded.
    pub(crate) fn commit(&mut self, claims: ClaimSet) {
        for (name, attribute) in claims.instance {
            self.instance.insert(name, attribute);
        }
        for (name, attribute) in claims.class {
            self.class.insert(name, attribute);
        }
    }
}

/// Staged claims for one compilation, checked against the registry and
/// against each other but not yet visible to other compilations.
#[derive(Debug, Default)]
pub(crate) struct ClaimSet {
    attribute: String,
    instance: FxHashMap<String, String>,
    class: FxHashMap<String, String>,
}

impl ClaimSet {
    pub(crate) fn new(attribute: &str) -> Self {
        Self { attribute: attribute.to_owned(), ..Self::default() }
    }

    /// Claims an instance-level name.
    ///
    /// The host-reserved check always precedes the cross-attribute check: a
    /// name that is both reserved and already claimed reports the host
    /// framework as the conflict source.
    pub(crate) fn claim_instance(
        &mut self,
        registry: &ConflictRegistry,
        host: &dyn HostType,
        name: &str,
    ) -> Result<(), ConflictError> {
        if host.is_reserved_instance_name(name) {
            return Err(self.conflict(host, name, MethodScope::Instance, ConflictSource::HostFramework));
        }
        let owner = registry.instance_owner(name).or_else(|| self.instance.get(name).map(String::as_str));
        if let Some(owner) = owner {
            let source = ConflictSource::Attribute(owner.to_owned());
            return Err(self.conflict(host, name, MethodScope::Instance, source));
        }

        self.instance.insert(name.to_owned(), self.attribute.clone());
        Ok(())
    }

    /// Claims a class-level name, with the same two-stage check against the
    /// host's class surface and the class-level claim map.
    pub(crate) fn claim_class(
        &mut self,
        registry: &ConflictRegistry,
        host: &dyn HostType,
        name: &str,
    ) -> Result<(), ConflictError> {
        if host.is_reserved_class_name(name) {
            return Err(self.conflict(host, name, MethodScope::Class, ConflictSource::HostFramework));
        }
        let owner = registry.class_owner(name).or_else(|| self.class.get(name).map(String::as_str));
        if let Some(owner) = owner {
            let source = ConflictSource::Attribute(owner.to_owned());
            return Err(self.conflict(host, name, MethodScope::Class, source));
        }

        self.class.insert(name.to_owned(), self.attribute.clone());
        Ok(())
    }

    fn conflict(
        &self,
        host: &dyn HostType,
        name: &str,
        scope: MethodScope,
        source: ConflictSource,
    ) -> ConflictError {
        ConflictError {
            source,
            host: host.type_name().to_owned(),
            attribute: self.attribute.clone(),
            method: name.to_owned(),
            scope,
        }
    }
}
