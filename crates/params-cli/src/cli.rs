//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Resolve typed deployment parameters into concrete values
#[derive(Parser, Debug)]
#[command(name = "params")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve every declared parameter
    ///
    /// Examples:
    ///   params resolve -d params.toml
    ///   params resolve -d params.toml -o .env.toml --non-interactive
    Resolve {
        #[command(flatten)]
        input: InputArgs,

        /// Accept defaults instead of prompting
        #[arg(long, env = "PARAMS_NON_INTERACTIVE")]
        non_interactive: bool,
    },

    /// Reconfigure an existing instance from its stored values
    ///
    /// Immutable parameters keep their stored value; mutable ones are
    /// prompted for with the stored value pre-filled.
    Configure {
        #[command(flatten)]
        input: InputArgs,

        /// TOML file holding the currently stored values
        #[arg(short, long)]
        previous: PathBuf,

        /// Not supported: reconfiguration always prompts
        #[arg(long, env = "PARAMS_NON_INTERACTIVE")]
        non_interactive: bool,
    },

    /// Move an existing instance to a new set of declarations
    ///
    /// Parameters declared in both sets keep their stored value, new ones
    /// are resolved and removed ones are dropped.
    ///
    /// Examples:
    ///   params update -d params-v2.toml --from params-v1.toml -p values.toml
    Update {
        /// New declarations are given by `--declarations`
        #[command(flatten)]
        input: InputArgs,

        /// TOML file with the declarations the instance was configured from
        #[arg(long)]
        from: PathBuf,

        /// TOML file holding the currently stored values
        #[arg(short, long)]
        previous: PathBuf,

        /// Accept defaults for new parameters instead of prompting
        #[arg(long, env = "PARAMS_NON_INTERACTIVE")]
        non_interactive: bool,
    },
}

/// Arguments shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
    /// TOML file with `[[params]]` declarations
    #[arg(short, long)]
    pub declarations: PathBuf,

    /// TOML file with `NAME = value` overrides
    #[arg(short, long)]
    pub overrides: Option<PathBuf>,

    /// Output format for the resolved values
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Output format for resolved values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
    Env,
}
