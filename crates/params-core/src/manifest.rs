//! Parameter declaration and value files.
//!
//! Declarations live in a TOML file with one `[[params]]` table per
//! parameter (see [`crate::param`] for the fields). Values, both overrides
//! and previously stored values, live in a flat TOML table of
//! `NAME = literal` pairs:
//!
//! ```toml
//! LOCATION = "us-central1"
//! MAX_INSTANCES = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::param::Param;
use crate::value::ParamValues;

/// An ordered list of parameter declarations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ParamManifest {
    /// Version of the declarations, compared by `update`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub params: Vec<Param>,
}

impl ParamManifest {
    /// Parse declarations from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse declarations from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Whether `other` declares the same, known version.
    pub fn same_version(&self, other: &ParamManifest) -> bool {
        matches!((&self.version, &other.version), (Some(a), Some(b)) if a == b)
    }

    /// Validate parameter names.
    ///
    /// Names must be usable inside `{{ params.NAME }}` and unique.
    fn validate(&self) -> Result<()> {
        for (i, param) in self.params.iter().enumerate() {
            let name = param.name();
            if name.is_empty() {
                return Err(Error::InvalidName {
                    name: name.to_string(),
                    reason: "parameter name must not be empty".to_string(),
                });
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(Error::InvalidName {
                    name: name.to_string(),
                    reason: "parameter name must contain only alphanumeric characters or underscores"
                        .to_string(),
                });
            }
            if self.params[..i].iter().any(|p| p.name() == name) {
                return Err(Error::DuplicateParam(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Parse a flat `NAME = literal` TOML table.
pub fn values_from_toml(content: &str) -> Result<ParamValues> {
    toml::from_str(content).map_err(Error::ValuesParse)
}

/// Read a flat `NAME = literal` TOML table. A missing file yields no values.
pub fn values_from_path(path: &Path) -> Result<ParamValues> {
    match std::fs::read_to_string(path) {
        Ok(content) => values_from_toml(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No values file at {:?}", path);
            Ok(ParamValues::new())
        }
        Err(e) => Err(Error::Io(e)),
    }
}

/// Serialize values as a flat TOML table, in map order.
pub fn values_to_toml(values: &ParamValues) -> Result<String> {
    toml::to_string(values).map_err(|e| Error::ManifestSerialize(e.to_string()))
}
