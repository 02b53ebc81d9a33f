//! The `update` command

use std::path::Path;

use params_core::{
    ParamManifest, ParamResolver, ResolveMode, TerminalPrompter, update, values_from_path,
};

use super::{ensure_interactive, load_inputs, print_values};
use crate::cli::InputArgs;
use crate::error::Result;

/// Carry the stored values of an instance over to new declarations.
pub fn run_update(
    input: &InputArgs,
    from: &Path,
    previous: &Path,
    non_interactive: bool,
) -> Result<()> {
    let inputs = load_inputs(input)?;
    let old_manifest = ParamManifest::from_path(from)?;

    if old_manifest.same_version(&inputs.manifest) {
        tracing::info!(
            "{} is already up to date. Its version is {}.",
            previous.display(),
            inputs.manifest.version.as_deref().unwrap_or_default()
        );
        return Ok(());
    }
    tracing::info!(
        "Updating {} from version {} to version {}.",
        previous.display(),
        old_manifest.version.as_deref().unwrap_or("unknown"),
        inputs.manifest.version.as_deref().unwrap_or("unknown")
    );

    let mode = if non_interactive {
        ResolveMode::NonInteractive
    } else {
        ensure_interactive()?;
        ResolveMode::Interactive
    };

    let current = values_from_path(previous)?;
    let mut prompter = TerminalPrompter::new();
    let mut resolver = ParamResolver::new(&mut prompter).with_mode(mode);
    let values = update(
        &mut resolver,
        &old_manifest.params,
        &inputs.manifest.params,
        &current,
        &inputs.overrides,
    )?;

    print_values(&values, input.format)
}
