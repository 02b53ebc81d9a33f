//! The `resolve` command

use params_core::{ParamResolver, ResolveMode, TerminalPrompter};

use super::{ensure_interactive, load_inputs, print_values};
use crate::cli::InputArgs;
use crate::error::Result;

/// Resolve every declared parameter and print the values.
pub fn run_resolve(input: &InputArgs, non_interactive: bool) -> Result<()> {
    let inputs = load_inputs(input)?;

    let mode = if non_interactive {
        ResolveMode::NonInteractive
    } else {
        ensure_interactive()?;
        ResolveMode::Interactive
    };

    let mut prompter = TerminalPrompter::new();
    let values = ParamResolver::new(&mut prompter)
        .with_mode(mode)
        .resolve(&inputs.manifest.params, &inputs.overrides)?;

    print_values(&values, input.format)
}
