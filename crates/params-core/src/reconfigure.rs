//! Reconfiguration and update of an already configured instance.
//!
//! Both flows run a full resolution pass over the declared parameters, in
//! declaration order, with some stored values pinned in place:
//!
//! * [`reconfigure`] pins immutable parameters to their stored value and
//!   uses the stored values of mutable parameters as the new defaults.
//! * [`update`] moves an instance to a new list of declarations. Parameters
//!   declared in both lists keep their stored value, new ones are resolved
//!   normally and removed ones are dropped.
//!
//! Pinned values take precedence over user overrides and are visible to the
//! default expressions of every parameter declared after them.

use crate::error::Result;
use crate::param::Param;
use crate::resolve::ParamResolver;
use crate::value::ParamValues;

/// Split parameters into `(immutable, mutable)`, preserving order.
pub fn partition_immutable(params: &[Param]) -> (Vec<Param>, Vec<Param>) {
    params.iter().cloned().partition(|param| param.spec().immutable)
}

/// Copies of `params` whose default is replaced by the previous value, where
/// one exists.
pub fn with_previous_defaults(params: &[Param], previous: &ParamValues) -> Vec<Param> {
    params
        .iter()
        .map(|param| match previous.get(param.name()) {
            Some(value) => param.clone().with_default(value.clone()),
            None => param.clone(),
        })
        .collect()
}

/// Resolve `params` with `pinned` values layered over `overrides`.
fn resolve_pinned(
    resolver: &mut ParamResolver<'_>,
    params: &[Param],
    pinned: ParamValues,
    overrides: &ParamValues,
) -> Result<ParamValues> {
    let mut layered = overrides.clone();
    layered.extend(pinned);
    resolver.resolve(params, &layered)
}

/// Resolve new values for an existing instance.
///
/// Immutable parameters with a stored value keep it; an immutable parameter
/// with no stored value is resolved like any other. The result is `previous`
/// overlaid with one entry per declared parameter, so keys not declared in
/// `params` are carried over.
pub fn reconfigure(
    resolver: &mut ParamResolver<'_>,
    params: &[Param],
    previous: &ParamValues,
    overrides: &ParamValues,
) -> Result<ParamValues> {
    let (immutable, _) = partition_immutable(params);
    let pinned: ParamValues = immutable
        .iter()
        .filter_map(|param| {
            previous
                .get_key_value(param.name())
                .map(|(name, value)| (name.clone(), value.clone()))
        })
        .collect();
    report_immutable(&pinned);

    let params = with_previous_defaults(params, previous);
    let resolved = resolve_pinned(resolver, &params, pinned, overrides)?;

    let mut merged = previous.clone();
    merged.extend(resolved);
    Ok(merged)
}

/// Resolve values for `new_params` when moving an instance off `old_params`.
///
/// Parameters declared in both lists keep their `current` value. Parameters
/// only in `new_params`, or retained ones with no current value, are
/// resolved normally and can reference any parameter declared before them.
/// Parameters only in `old_params` are dropped, so the result holds exactly
/// one entry per parameter in `new_params`.
pub fn update(
    resolver: &mut ParamResolver<'_>,
    old_params: &[Param],
    new_params: &[Param],
    current: &ParamValues,
    overrides: &ParamValues,
) -> Result<ParamValues> {
    let pinned: ParamValues = new_params
        .iter()
        .filter(|param| old_params.iter().any(|old| old.name() == param.name()))
        .filter_map(|param| {
            current
                .get_key_value(param.name())
                .map(|(name, value)| (name.clone(), value.clone()))
        })
        .collect();

    for old in old_params {
        if !new_params.iter().any(|param| param.name() == old.name()) {
            tracing::info!("param: {} is no longer declared and will be removed", old.name());
        }
    }

    resolve_pinned(resolver, new_params, pinned, overrides)
}

fn report_immutable(pinned: &ParamValues) {
    if pinned.is_empty() {
        return;
    }

    let plural = pinned.len() > 1;
    tracing::warn!(
        "The following param{} immutable and won't be changed:",
        if plural { "s are" } else { " is" }
    );
    for (name, value) in pinned {
        tracing::info!("param: {}, value: {}", name, value);
    }
    tracing::info!(
        "{}, uninstall the extension, then install a new instance of this extension.",
        if plural {
            "To set different values for these params"
        } else {
            "To set a different value for this param"
        }
    );
}
