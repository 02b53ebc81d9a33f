//! Command implementations for params-cli

pub mod configure;
pub mod resolve;
pub mod update;

pub use configure::run_configure;
pub use resolve::run_resolve;
pub use update::run_update;

use std::io::IsTerminal;

use params_core::{ParamManifest, ParamValues, values_from_path, values_to_toml};

use crate::cli::{InputArgs, OutputFormat};
use crate::error::{CliError, Result};

/// Declarations and overrides named by the shared arguments.
struct Inputs {
    manifest: ParamManifest,
    overrides: ParamValues,
}

fn load_inputs(input: &InputArgs) -> Result<Inputs> {
    let manifest = ParamManifest::from_path(&input.declarations)?;
    let overrides = match &input.overrides {
        Some(path) => values_from_path(path)?,
        None => ParamValues::new(),
    };
    tracing::debug!(
        params = manifest.params.len(),
        overrides = overrides.len(),
        "Loaded inputs"
    );
    Ok(Inputs {
        manifest,
        overrides,
    })
}

/// Prompting needs a terminal; decide before resolution starts.
fn ensure_interactive() -> Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(CliError::user(
            "stdin is not a terminal; pass --non-interactive to accept defaults without prompting",
        ))
    }
}

fn render(values: &ParamValues, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(values)?,
        OutputFormat::Toml => values_to_toml(values)?,
        OutputFormat::Env => values
            .iter()
            .map(|(name, value)| format!("{}={}\n", name, value.to_plain_string()))
            .collect(),
    })
}

fn print_values(values: &ParamValues, format: OutputFormat) -> Result<()> {
    let output = render(values, format)?;
    println!("{}", output.trim_end());
    Ok(())
}
