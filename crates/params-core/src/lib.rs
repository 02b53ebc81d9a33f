//! Typed parameter resolution for deployable units.
//!
//! Resolves an ordered list of declared parameters into a concrete value
//! map at configure or deploy time. Each parameter is satisfied by an
//! override, a literal default, a `{{ params.NAME }}` reference to an
//! earlier parameter, or an interactive prompt.
//!
//! # Architecture
//!
//! ```text
//!                 ParamResolver (resolve)
//!                /        |          \
//!   validate (types)   expr (refs)   prompt (Prompter)
//!                \        |          /
//!                  param / value (data model)
//! ```
//!
//! # Example
//!
//! ```
//! use params_core::{Param, ParamValues, ScriptedPrompter, resolve_params};
//!
//! let params = vec![
//!     Param::string("A"),
//!     Param::string("B").with_default("{{ params.A }}"),
//! ];
//! let mut overrides = ParamValues::new();
//! overrides.insert("A".to_string(), "x".into());
//!
//! let mut prompter = ScriptedPrompter::new().accept_default();
//! let values = resolve_params(&params, &overrides, &mut prompter).unwrap();
//! assert_eq!(values["B"], "x".into());
//! ```

pub mod error;
pub mod expr;
pub mod manifest;
pub mod param;
pub mod prompt;
pub mod reconfigure;
pub mod resolve;
pub mod validate;
pub mod value;

pub use error::{Error, Result};
pub use manifest::{ParamManifest, values_from_path, values_from_toml, values_to_toml};
pub use param::{InputKind, InputSpec, IntParam, Param, ParamSpec, ParamType, StringParam};
pub use prompt::{PromptKind, PromptRequest, Prompter, ScriptedPrompter, TerminalPrompter};
pub use reconfigure::{reconfigure, update};
pub use resolve::{ParamResolver, ResolveMode, resolve_params};
pub use value::{ParamValue, ParamValues, ValueKind};
