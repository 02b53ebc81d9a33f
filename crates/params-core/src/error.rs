use std::path::PathBuf;

use crate::value::{ParamValue, ValueKind};

/// Errors that can occur while resolving parameters.
///
/// Every variant is fatal to the resolution pass that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value does not satisfy the declared type of the parameter (or the
    /// kind requested by an expression).
    #[error("parameter '{name}' expects a value of type {expected}, got {} value {found}", .found.kind())]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        found: ParamValue,
    },

    /// A default expression references a parameter that has not been
    /// resolved yet in this pass.
    #[error("expression '{expression}' references parameter '{dependency}' which has not been resolved yet")]
    MissingDependency {
        expression: String,
        dependency: String,
    },

    /// The expression is not the identity form `{{ params.NAME }}`.
    #[error("evaluation of expression '{expression}' is not supported: {reason}")]
    UnsupportedExpression { expression: String, reason: String },

    /// The parameter declares an input kind this engine cannot prompt with.
    #[error("parameter '{name}' declares unsupported input type '{kind}'")]
    UnsupportedInputKind { name: String, kind: String },

    /// Non-interactive resolution found neither an override nor a default.
    #[error("no value available for parameter '{name}' and prompting is disabled")]
    MissingValue { name: String },

    /// Two declared parameters share the same name.
    #[error("parameter '{0}' is declared more than once")]
    DuplicateParam(String),

    /// The prompt adapter failed to produce an answer.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Failed to parse a parameter declaration file.
    #[error("failed to parse parameter declarations: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// Failed to parse a values file (overrides or stored values).
    #[error("failed to parse parameter values: {0}")]
    ValuesParse(toml::de::Error),

    /// Invalid parameter name.
    #[error("invalid parameter name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Failed to serialize values.
    #[error("failed to serialize values: {0}")]
    ManifestSerialize(String),

    /// Parameter declaration file not found.
    #[error("parameter declarations not found: {0}")]
    ManifestNotFound(PathBuf),

    /// I/O error reading declaration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
