//! A [`Prompter`] that replays queued answers instead of reading a terminal.
//!
//! Every request is recorded, so callers can assert which parameters were
//! asked for and with which defaults.

use std::collections::VecDeque;

use super::{PromptKind, PromptRequest, Prompter};
use crate::error::{Error, Result};
use crate::value::ParamValue;

/// A question the [`ScriptedPrompter`] was asked.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPrompt {
    pub name: String,
    pub kind: PromptKind,
    pub default: Option<ParamValue>,
    pub message: String,
}

/// Answers prompts from a fixed script, recording every question.
///
/// An answer of `None` accepts the suggested default. Running out of
/// answers is an error, which also ends the integer re-prompt loop.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<ParamValue>>,
    asked: Vec<RecordedPrompt>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a literal answer.
    pub fn answer(mut self, value: impl Into<ParamValue>) -> Self {
        self.answers.push_back(Some(value.into()));
        self
    }

    /// Queue an answer that accepts whatever default is suggested.
    pub fn accept_default(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Every question asked so far, in order.
    pub fn asked(&self) -> &[RecordedPrompt] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<ParamValue> {
        self.asked.push(RecordedPrompt {
            name: request.name.to_string(),
            kind: request.kind,
            default: request.default.cloned(),
            message: request.message.clone(),
        });

        match self.answers.pop_front() {
            Some(Some(value)) => Ok(value),
            Some(None) => request.default.cloned().ok_or_else(|| {
                Error::Prompt(format!("no default to accept for '{}'", request.name))
            }),
            None => Err(Error::Prompt(format!(
                "no scripted answer left for '{}'",
                request.name
            ))),
        }
    }
}
