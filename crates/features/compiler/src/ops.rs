//! The compiled operation surface of one flag-set.
//!
//! [`CompiledFlagSet`] is pure derived data: per-flag operations, aggregate
//! accessors, and membership predicates, bound to the attribute they were
//! compiled for. The host type stores the set and dispatches through it;
//! nothing here injects names anywhere or generates source text.

use crate::bits::{self, Combinator};
use crate::error::UnknownFlagError;
use fxhash::FxHashMap;
use maskset_domain::{Membership, Options, RangeConstraint, Setting};

/// Generated method names for a single flag, in the order they are claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMethodNames {
    pub check: String,
    pub toggle: String,
    pub enable: String,
    pub disable: String,
    pub enabled_scope: String,
    pub disabled_scope: String,
}

impl FlagMethodNames {
    pub(crate) fn for_label(label: &str) -> Self {
        Self {
            check: label.to_owned(),
            toggle: format!("toggle_{label}"),
            enable: format!("enable_{label}"),
            disable: format!("disable_{label}"),
            enabled_scope: format!("{label}_enabled"),
            disabled_scope: format!("{label}_disabled"),
        }
    }
}

/// Compiled per-flag state: the bit position, its mask, and the two scope
/// membership sets computed at compile time.
#[derive(Debug, Clone)]
pub(crate) struct FlagOps {
    pub(crate) name: String,
    pub(crate) mask: u64,
    pub(crate) enabled: Membership,
    pub(crate) disabled: Membership,
    pub(crate) names: FlagMethodNames,
}

/// Generated names for the aggregate operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateMethodNames {
    pub settings: String,
    pub getter: String,
    pub setter: String,
    pub flag_list: String,
    pub none_enabled_scope: String,
    pub any_enabled_scope: String,
    pub any_disabled_scope: String,
    pub all_enabled_scope: String,
    pub all_disabled_scope: String,
}

impl AggregateMethodNames {
    pub(crate) fn for_attribute(attribute: &str) -> Self {
        Self {
            settings: format!("{attribute}_settings"),
            getter: attribute.to_owned(),
            setter: format!("set_{attribute}"),
            flag_list: attribute.to_owned(),
            none_enabled_scope: format!("no_{attribute}_enabled"),
            any_enabled_scope: format!("any_{attribute}_enabled"),
            any_disabled_scope: format!("any_{attribute}_disabled"),
            all_enabled_scope: format!("all_{attribute}_enabled"),
            all_disabled_scope: format!("all_{attribute}_disabled"),
        }
    }
}

/// Manifest of every generated name claimed by one compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodManifest {
    pub instance: Vec<String>,
    pub class: Vec<String>,
}

/// Input accepted by the dynamic setter: a packed integer directly, one flag
/// name, or an ordered list of flag names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetterInput {
    Value(u64),
    Flag(String),
    Flags(Vec<String>),
}

impl From<u64> for SetterInput {
    fn from(value: u64) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for SetterInput {
    fn from(flag: &str) -> Self {
        Self::Flag(flag.to_owned())
    }
}

impl From<Vec<&str>> for SetterInput {
    fn from(flags: Vec<&str>) -> Self {
        Self::Flags(flags.into_iter().map(str::to_owned).collect())
    }
}

/// The full behavioral surface compiled from one flag-set definition.
///
/// All reads go through the nil policy, so every operation accepts the raw,
/// possibly-absent stored value. Mutators return the packed value to write
/// back; persisting it is the host's storage collaborator's job.
#[derive(Debug, Clone)]
pub struct CompiledFlagSet {
    pub(crate) attribute: String,
    pub(crate) options: Options,
    pub(crate) flag_count: u32,
    pub(crate) flags: Vec<FlagOps>,
    pub(crate) index_by_name: FxHashMap<String, u32>,
    pub(crate) none_enabled: Membership,
    pub(crate) constraint: Option<RangeConstraint>,
    pub(crate) aggregate_names: AggregateMethodNames,
    pub(crate) manifest: MethodManifest,
}

impl CompiledFlagSet {
    /// The packed attribute this surface was compiled for.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The exact declared flag sequence, in bit-position order.
    #[must_use]
    pub fn flags(&self) -> Vec<&str> {
        self.flags.iter().map(|f| f.name.as_str()).collect()
    }

    #[must_use]
    pub const fn flag_count(&self) -> u32 {
        self.flag_count
    }

    /// The emitted range constraint, present unless `validate` was disabled.
    #[must_use]
    pub const fn constraint(&self) -> Option<&RangeConstraint> {
        self.constraint.as_ref()
    }

    /// Every generated name claimed by this compilation.
    #[must_use]
    pub const fn method_names(&self) -> &MethodManifest {
        &self.manifest
    }

    /// Generated method names for one flag.
    pub fn flag_method_names(&self, flag: &str) -> Result<&FlagMethodNames, UnknownFlagError> {
        self.flag_ops(flag).map(|ops| &ops.names)
    }

    /// Generated names for the aggregate operations.
    #[must_use]
    pub const fn aggregate_method_names(&self) -> &AggregateMethodNames {
        &self.aggregate_names
    }

    // --- Per-flag operations ---

    /// True if the flag's bit is set in the (nil-read) stored value.
    pub fn check(&self, flag: &str, raw: Option<u64>) -> Result<bool, UnknownFlagError> {
        let ops = self.flag_ops(flag)?;
        Ok(self.read(raw) & ops.mask != 0)
    }

    /// The stored value with the flag's bit flipped.
    pub fn toggle(&self, flag: &str, raw: Option<u64>) -> Result<u64, UnknownFlagError> {
        let ops = self.flag_ops(flag)?;
        Ok(self.read(raw) ^ ops.mask)
    }

    /// The stored value with the flag's bit set.
    pub fn enable(&self, flag: &str, raw: Option<u64>) -> Result<u64, UnknownFlagError> {
        let ops = self.flag_ops(flag)?;
        Ok(self.read(raw) | ops.mask)
    }

    /// The stored value with the flag's bit cleared.
    pub fn disable(&self, flag: &str, raw: Option<u64>) -> Result<u64, UnknownFlagError> {
        let ops = self.flag_ops(flag)?;
        Ok(self.read(raw) & !ops.mask)
    }

    /// Membership predicate selecting rows where the flag is enabled.
    pub fn enabled_scope(&self, flag: &str) -> Result<&Membership, UnknownFlagError> {
        self.flag_ops(flag).map(|ops| &ops.enabled)
    }

    /// Membership predicate selecting rows where the flag is disabled
    /// (including absent rows under the `include` nil policy).
    pub fn disabled_scope(&self, flag: &str) -> Result<&Membership, UnknownFlagError> {
        self.flag_ops(flag).map(|ops| &ops.disabled)
    }

    // --- Aggregate operations ---

    /// Flag name to boolean for every declared flag, in declaration order.
    #[must_use]
    pub fn settings(&self, raw: Option<u64>) -> Vec<(&str, bool)> {
        let value = self.read(raw);
        self.flags.iter().map(|ops| (ops.name.as_str(), value & ops.mask != 0)).collect()
    }

    /// Names of the enabled flags, in declaration order.
    #[must_use]
    pub fn enabled_flags(&self, raw: Option<u64>) -> Vec<&str> {
        let value = self.read(raw);
        self.flags
            .iter()
            .filter(|ops| value & ops.mask != 0)
            .map(|ops| ops.name.as_str())
            .collect()
    }

    /// Computes the packed value for a setter input.
    ///
    /// Integers pass through untouched; flag names map to their bit via the
    /// compiled flag list and are OR-ed together. Any unresolvable name fails
    /// before a value is produced.
    pub fn set_value(&self, input: impl Into<SetterInput>) -> Result<u64, UnknownFlagError> {
        match input.into() {
            SetterInput::Value(value) => Ok(value),
            SetterInput::Flag(flag) => self.flag_ops(&flag).map(|ops| ops.mask),
            SetterInput::Flags(flags) => {
                let mut value = 0;
                for flag in &flags {
                    value |= self.flag_ops(flag)?.mask;
                }
                Ok(value)
            },
        }
    }

    /// Membership predicate selecting rows with no flag enabled: exactly the
    /// value `0`, plus absent rows under the `include` nil policy.
    #[must_use]
    pub const fn none_enabled_scope(&self) -> &Membership {
        &self.none_enabled
    }

    // --- Dynamic scopes ---

    /// Rows where at least one of the given flags is enabled.
    pub fn any_enabled<S: AsRef<str>>(&self, flags: &[S]) -> Result<Membership, UnknownFlagError> {
        self.dynamic_scope(flags, Setting::On, Combinator::Any)
    }

    /// Rows where at least one of the given flags is disabled.
    pub fn any_disabled<S: AsRef<str>>(&self, flags: &[S]) -> Result<Membership, UnknownFlagError> {
        self.dynamic_scope(flags, Setting::Off, Combinator::Any)
    }

    /// Rows where every one of the given flags is enabled.
    pub fn all_enabled<S: AsRef<str>>(&self, flags: &[S]) -> Result<Membership, UnknownFlagError> {
        self.dynamic_scope(flags, Setting::On, Combinator::All)
    }

    /// Rows where every one of the given flags is disabled.
    pub fn all_disabled<S: AsRef<str>>(&self, flags: &[S]) -> Result<Membership, UnknownFlagError> {
        self.dynamic_scope(flags, Setting::Off, Combinator::All)
    }

    // --- Internals ---

    fn read(&self, raw: Option<u64>) -> u64 {
        self.options.nil_handling().read(raw)
    }

    fn flag_ops(&self, flag: &str) -> Result<&FlagOps, UnknownFlagError> {
        self.index_by_name
            .get(flag)
            .map(|&index| &self.flags[index as usize])
            .ok_or_else(|| self.unknown_flag(flag))
    }

    /// Resolves every name before any arithmetic; the first unknown name in a
    /// left-to-right scan wins the error.
    fn resolve_indices<S: AsRef<str>>(&self, flags: &[S]) -> Result<Vec<u32>, UnknownFlagError> {
        flags
            .iter()
            .map(|flag| {
                self.index_by_name
                    .get(flag.as_ref())
                    .copied()
                    .ok_or_else(|| self.unknown_flag(flag.as_ref()))
            })
            .collect()
    }

    fn dynamic_scope<S: AsRef<str>>(
        &self,
        flags: &[S],
        setting: Setting,
        combinator: Combinator,
    ) -> Result<Membership, UnknownFlagError> {
        let indices = self.resolve_indices(flags)?;
        let values = bits::combine_across_flags(&indices, setting, combinator, self.flag_count);
        Ok(self.options.nil_handling().membership(values, setting))
    }

    fn unknown_flag(&self, flag: &str) -> UnknownFlagError {
        UnknownFlagError { flag: flag.to_owned(), attribute: self.attribute.clone() }
    }
}
