//! Terminal prompts backed by dialoguer.

use dialoguer::Input;

use super::{PromptKind, PromptRequest, Prompter};
use crate::error::Result;
use crate::value::ParamValue;

/// Prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<ParamValue> {
        let mut input = Input::<String>::new()
            .with_prompt(request.message.as_str())
            .allow_empty(true);
        if let Some(default) = request.default {
            input = input.default(default.to_plain_string());
        }
        let raw = input.interact_text()?;

        Ok(match request.kind {
            PromptKind::Text => ParamValue::String(raw),
            PromptKind::Number => parse_number(&raw),
        })
    }
}

/// Interpret a typed answer to a number prompt.
///
/// Answers that are not numbers are passed through as strings so the
/// caller can report them and ask again.
fn parse_number(raw: &str) -> ParamValue {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        ParamValue::Int(n)
    } else if let Ok(f) = trimmed.parse::<f64>() {
        ParamValue::Float(f)
    } else {
        ParamValue::String(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), ParamValue::Int(42));
        assert_eq!(parse_number("3.5"), ParamValue::Float(3.5));
        assert_eq!(parse_number("abc"), ParamValue::String("abc".to_string()));
    }
}
