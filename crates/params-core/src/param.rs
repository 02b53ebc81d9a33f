//! Parameter declarations.
//!
//! A parameter is a typed, named configuration slot declared by a deployable
//! unit. Parameters are a closed sum type over their declared type, so every
//! `match` on [`Param`] must handle every kind.
//!
//! # Example TOML
//!
//! ```toml
//! [[params]]
//! name = "LOCATION"
//! type = "string"
//! label = "Cloud region"
//! default = "us-central1"
//!
//! [[params]]
//! name = "MAX_INSTANCES"
//! type = "int"
//! default = 10
//! immutable = true
//!
//! [[params]]
//! name = "BACKUP_LOCATION"
//! type = "string"
//! default = "{{ params.LOCATION }}"
//! input = { text = { example = "europe-west1" } }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{ParamValue, ValueKind};

/// A declared parameter, discriminated by its `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Param {
    String(StringParam),
    Int(IntParam),
}

/// Fields shared by every parameter kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name. Used as the key of the resolved map and as the
    /// identifier expressions refer to.
    pub name: String,
    /// Human friendly name shown when prompting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Longer description of the purpose and allowed values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Literal default or a `{{ params.NAME }}` reference expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
    /// Informational only; the resolver does not enforce it.
    #[serde(default)]
    pub immutable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringParam {
    #[serde(flatten)]
    pub spec: ParamSpec,
    /// Defaults to a text input when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntParam {
    #[serde(flatten)]
    pub spec: ParamSpec,
    /// Defaults to a text input when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputSpec>,
}

/// How a parameter's value is collected interactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSpec {
    Text(TextInput),
    Select(SelectInput),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectInput {
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Human-facing text for this option (e.g. "US Central (Iowa)").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Value of the parameter if this option is picked.
    pub value: ParamValue,
}

/// The input kind actually used when prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Select,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Text => f.write_str("text"),
            InputKind::Select => f.write_str("select"),
        }
    }
}

impl InputSpec {
    pub fn kind(&self) -> InputKind {
        match self {
            InputSpec::Text(_) => InputKind::Text,
            InputSpec::Select(_) => InputKind::Select,
        }
    }
}

/// The declared type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Int,
}

impl ParamType {
    /// The runtime kind a resolved value of this type has.
    pub fn value_kind(self) -> ValueKind {
        match self {
            ParamType::String => ValueKind::String,
            ParamType::Int => ValueKind::Int,
        }
    }
}

impl Param {
    /// Create a string parameter with no label, description or default.
    pub fn string(name: impl Into<String>) -> Self {
        Param::String(StringParam {
            spec: ParamSpec::new(name),
            input: None,
        })
    }

    /// Create an int parameter with no label, description or default.
    pub fn int(name: impl Into<String>) -> Self {
        Param::Int(IntParam {
            spec: ParamSpec::new(name),
            input: None,
        })
    }

    pub fn with_default(mut self, default: impl Into<ParamValue>) -> Self {
        self.spec_mut().default = Some(default.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.spec_mut().label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.spec_mut().description = Some(description.into());
        self
    }

    pub fn with_input(mut self, input: InputSpec) -> Self {
        match &mut self {
            Param::String(p) => p.input = Some(input),
            Param::Int(p) => p.input = Some(input),
        }
        self
    }

    pub fn immutable(mut self) -> Self {
        self.spec_mut().immutable = true;
        self
    }

    pub fn spec(&self) -> &ParamSpec {
        match self {
            Param::String(p) => &p.spec,
            Param::Int(p) => &p.spec,
        }
    }

    pub fn spec_mut(&mut self) -> &mut ParamSpec {
        match self {
            Param::String(p) => &mut p.spec,
            Param::Int(p) => &mut p.spec,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec().name
    }

    pub fn param_type(&self) -> ParamType {
        match self {
            Param::String(_) => ParamType::String,
            Param::Int(_) => ParamType::Int,
        }
    }

    pub fn input(&self) -> Option<&InputSpec> {
        match self {
            Param::String(p) => p.input.as_ref(),
            Param::Int(p) => p.input.as_ref(),
        }
    }

    /// The input kind to prompt with. A missing input spec means text.
    pub fn effective_input_kind(&self) -> InputKind {
        self.input().map_or(InputKind::Text, InputSpec::kind)
    }

    /// The name shown to users: the label if present, else the name.
    pub fn display_name(&self) -> &str {
        let spec = self.spec();
        spec.label.as_deref().unwrap_or(&spec.name)
    }
}

impl ParamSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: None,
            default: None,
            immutable: false,
        }
    }
}
