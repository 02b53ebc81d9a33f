//! The `configure` command

use std::path::Path;

use params_core::{ParamResolver, TerminalPrompter, reconfigure, values_from_path};

use super::{ensure_interactive, load_inputs, print_values};
use crate::cli::InputArgs;
use crate::error::{CliError, Result};

/// Re-resolve the mutable parameters of an existing instance.
pub fn run_configure(input: &InputArgs, previous: &Path, non_interactive: bool) -> Result<()> {
    if non_interactive {
        return Err(CliError::user(format!(
            "configure is not supported in non-interactive mode, edit {} directly instead",
            previous.display()
        )));
    }
    ensure_interactive()?;

    let inputs = load_inputs(input)?;
    let previous_values = values_from_path(previous)?;

    let mut prompter = TerminalPrompter::new();
    let mut resolver = ParamResolver::new(&mut prompter);
    let values = reconfigure(
        &mut resolver,
        &inputs.manifest.params,
        &previous_values,
        &inputs.overrides,
    )?;

    print_values(&values, input.format)
}
