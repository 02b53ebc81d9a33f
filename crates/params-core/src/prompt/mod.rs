//! Interactive collection of parameter values.
//!
//! The resolver talks to the outside world only through the [`Prompter`]
//! trait. [`prompt_param`] turns a parameter declaration into prompt
//! requests, handling input kinds and the integer re-prompt loop, so
//! prompter implementations only need to ask one question and return one
//! answer.

mod scripted;
mod terminal;

pub use scripted::{RecordedPrompt, ScriptedPrompter};
pub use terminal::TerminalPrompter;

use crate::error::{Error, Result};
use crate::param::{InputKind, Param};
use crate::value::ParamValue;

/// The kind of answer a prompt expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Number,
}

/// A single question put to a [`Prompter`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest<'a> {
    /// Name of the parameter being asked for.
    pub name: &'a str,
    pub label: Option<&'a str>,
    pub description: Option<&'a str>,
    pub kind: PromptKind,
    /// Suggested value, pre-filled when the prompter supports it.
    pub default: Option<&'a ParamValue>,
    /// Full message to display.
    pub message: String,
}

/// Source of interactively supplied values.
///
/// Each call blocks until exactly one answer is available.
pub trait Prompter {
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<ParamValue>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<ParamValue> {
        (**self).ask(request)
    }
}

/// Ask for a value for `param`, pre-filling `default` if given.
pub fn prompt_param(
    prompter: &mut dyn Prompter,
    param: &Param,
    default: Option<&ParamValue>,
) -> Result<ParamValue> {
    match param {
        Param::String(_) => prompt_string_param(prompter, param, default),
        Param::Int(_) => prompt_int_param(prompter, param, default),
    }
}

/// Ask for a string value. An empty answer is a valid answer.
pub fn prompt_string_param(
    prompter: &mut dyn Prompter,
    param: &Param,
    default: Option<&ParamValue>,
) -> Result<ParamValue> {
    match param.effective_input_kind() {
        InputKind::Select => Err(unsupported_input(param)),
        InputKind::Text => {
            let request = request_for(param, PromptKind::Text, default);
            prompter.ask(&request)
        }
    }
}

/// Ask for an integer value, re-prompting until the answer is an integer.
pub fn prompt_int_param(
    prompter: &mut dyn Prompter,
    param: &Param,
    default: Option<&ParamValue>,
) -> Result<ParamValue> {
    match param.effective_input_kind() {
        InputKind::Select => Err(unsupported_input(param)),
        InputKind::Text => {
            let request = request_for(param, PromptKind::Number, default);
            loop {
                let answer = prompter.ask(&request)?;
                if let Some(n) = answer.as_integer() {
                    return Ok(ParamValue::Int(n));
                }
                tracing::error!("{} must be an integer; retrying...", param.display_name());
            }
        }
    }
}

fn unsupported_input(param: &Param) -> Error {
    Error::UnsupportedInputKind {
        name: param.name().to_string(),
        kind: InputKind::Select.to_string(),
    }
}

fn request_for<'a>(
    param: &'a Param,
    kind: PromptKind,
    default: Option<&'a ParamValue>,
) -> PromptRequest<'a> {
    let spec = param.spec();
    PromptRequest {
        name: &spec.name,
        label: spec.label.as_deref(),
        description: spec.description.as_deref(),
        kind,
        default,
        message: prompt_message(param),
    }
}

/// `Enter a value for NAME (LABEL) \n(DESCRIPTION)`, omitting absent parts.
pub fn prompt_message(param: &Param) -> String {
    let spec = param.spec();
    let mut message = format!("Enter a value for {}", spec.name);
    if let Some(label) = &spec.label {
        message.push_str(&format!(" ({})", label));
    }
    if let Some(description) = &spec.description {
        message.push_str(&format!(" \n({})", description));
    }
    message
}
