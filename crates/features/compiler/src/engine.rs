//! Single-pass flag-set compilation.
//!
//! Compilation is synchronous and fail-fast: validate the definition, resolve
//! options, claim every generated name, build the operation surface, and only
//! then commit the claims. Any failure surfaces exactly one typed error and
//! leaves the registry unchanged, so the host type ends up either fully
//! compiled or untouched.

use crate::bits;
use crate::error::CompileError;
use crate::ops::{
    AggregateMethodNames, CompiledFlagSet, FlagMethodNames, FlagOps, MethodManifest,
};
use crate::registry::{ClaimSet, ConflictRegistry};
use fxhash::FxHashMap;
use maskset_domain::{FlagSetDefinition, HostType, RangeConstraint, RawOptions, Setting};
use tracing::{debug, trace};

/// Compiles a flag-set definition into its operation surface.
///
/// The registry must be the one owned by `host`'s definer; it is only written
/// on success. Flags are processed in declaration order, each claiming its
/// generated names before the aggregate operations claim theirs.
///
/// # Errors
/// Returns [`CompileError::Definition`] for a malformed definition or options,
/// [`CompileError::Conflict`] when a generated name collides with the host's
/// reserved surface or a name already claimed by another attribute.
pub fn compile(
    host: &dyn HostType,
    registry: &mut ConflictRegistry,
    attribute: impl Into<String>,
    flags: impl IntoIterator<Item = impl Into<String>>,
    options: &RawOptions,
) -> Result<CompiledFlagSet, CompileError> {
    let definition = FlagSetDefinition::new(attribute, flags, options)?;
    compile_definition(host, registry, &definition)
}

/// Compiles an already-validated definition. See [`compile`].
pub fn compile_definition(
    host: &dyn HostType,
    registry: &mut ConflictRegistry,
    definition: &FlagSetDefinition,
) -> Result<CompiledFlagSet, CompileError> {
    let attribute = definition.attribute();
    let flag_count = definition.flag_count();
    let options = definition.options().clone();
    let nil = options.nil_handling();

    debug!(attribute, flag_count, host = host.type_name(), "compiling flag set");

    let mut claims = ClaimSet::new(attribute);
    let mut flags = Vec::with_capacity(flag_count as usize);
    let mut index_by_name = FxHashMap::default();

    for (index, name) in definition.flags().iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let index = index as u32;
        let label = definition.label(index as usize);
        let names = FlagMethodNames::for_label(&label);

        claims.claim_instance(registry, host, &names.check)?;
        claims.claim_instance(registry, host, &names.toggle)?;
        claims.claim_instance(registry, host, &names.enable)?;
        claims.claim_instance(registry, host, &names.disable)?;
        claims.claim_class(registry, host, &names.enabled_scope)?;
        claims.claim_class(registry, host, &names.disabled_scope)?;

        let enabled =
            nil.membership(bits::values_where_flag(Setting::On, index, flag_count), Setting::On);
        let disabled =
            nil.membership(bits::values_where_flag(Setting::Off, index, flag_count), Setting::Off);

        trace!(flag = name.as_str(), index, label = label.as_str(), "emitted per-flag operations");

        index_by_name.insert(name.clone(), index);
        flags.push(FlagOps { name: name.clone(), mask: 1 << index, enabled, disabled, names });
    }

    let aggregate_names = AggregateMethodNames::for_attribute(attribute);
    claims.claim_instance(registry, host, &aggregate_names.settings)?;
    claims.claim_instance(registry, host, &aggregate_names.getter)?;
    claims.claim_instance(registry, host, &aggregate_names.setter)?;
    claims.claim_class(registry, host, &aggregate_names.flag_list)?;
    claims.claim_class(registry, host, &aggregate_names.none_enabled_scope)?;
    claims.claim_class(registry, host, &aggregate_names.any_enabled_scope)?;
    claims.claim_class(registry, host, &aggregate_names.any_disabled_scope)?;
    claims.claim_class(registry, host, &aggregate_names.all_enabled_scope)?;
    claims.claim_class(registry, host, &aggregate_names.all_disabled_scope)?;

    let constraint = options
        .validate()
        .then(|| RangeConstraint::new(attribute, 1u64 << flag_count));

    let none_enabled = nil.membership(vec![0], Setting::Off);

    let manifest = manifest_of(&flags, &aggregate_names);
    let compiled = CompiledFlagSet {
        attribute: attribute.to_owned(),
        options,
        flag_count,
        flags,
        index_by_name,
        none_enabled,
        constraint,
        aggregate_names,
        manifest,
    };

    registry.commit(claims);
    debug!(
        attribute,
        instance_methods = compiled.manifest.instance.len(),
        class_methods = compiled.manifest.class.len(),
        "flag set compiled"
    );

    Ok(compiled)
}

fn manifest_of(flags: &[FlagOps], aggregate: &AggregateMethodNames) -> MethodManifest {
    let mut manifest = MethodManifest::default();
    for ops in flags {
        manifest.instance.extend([
            ops.names.check.clone(),
            ops.names.toggle.clone(),
            ops.names.enable.clone(),
            ops.names.disable.clone(),
        ]);
        manifest.class.extend([ops.names.enabled_scope.clone(), ops.names.disabled_scope.clone()]);
    }
    manifest.instance.extend([
        aggregate.settings.clone(),
        aggregate.getter.clone(),
        aggregate.setter.clone(),
    ]);
    manifest.class.extend([
        aggregate.flag_list.clone(),
        aggregate.none_enabled_scope.clone(),
        aggregate.any_enabled_scope.clone(),
        aggregate.any_disabled_scope.clone(),
        aggregate.all_enabled_scope.clone(),
        aggregate.all_disabled_scope.clone(),
    ]);
    manifest
}
