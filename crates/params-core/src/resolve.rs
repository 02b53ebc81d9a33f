//! Ordered resolution of declared parameters into concrete values.
//!
//! A resolution pass walks the declared parameters strictly in order. For
//! each parameter the value comes from, in order of precedence:
//!
//! 1. the override map, validated but never coerced;
//! 2. an interactive prompt, pre-filled with the parameter's default. The
//!    default is either a literal or a `{{ params.NAME }}` expression over
//!    parameters resolved earlier in the same pass.
//!
//! In [`ResolveMode::NonInteractive`] the computed default is accepted as is
//! instead of prompting.
//!
//! Any error aborts the pass and no partial map is returned. Because a
//! default can only observe parameters resolved before it, the same set of
//! parameters may or may not resolve depending on the order it is declared
//! in; the order is never changed.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::expr;
use crate::param::Param;
use crate::prompt::{Prompter, prompt_param};
use crate::validate;
use crate::value::{ParamValue, ParamValues};

/// Whether a pass may prompt for values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Always prompt unless an override supplies the value. Defaults are
    /// only pre-filled suggestions.
    #[default]
    Interactive,
    /// Never prompt. Parameters without an override take their default, and
    /// parameters with neither fail with [`Error::MissingValue`].
    NonInteractive,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Override,
    Default,
    Prompt,
}

/// Resolves a list of parameter declarations in a single ordered pass.
pub struct ParamResolver<'p> {
    prompter: &'p mut dyn Prompter,
    mode: ResolveMode,
}

impl<'p> ParamResolver<'p> {
    pub fn new(prompter: &'p mut dyn Prompter) -> Self {
        Self {
            prompter,
            mode: ResolveMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    /// Resolve every parameter in `params`, in declaration order.
    ///
    /// The returned map holds exactly one entry per parameter, keyed by name
    /// and in declaration order.
    pub fn resolve(&mut self, params: &[Param], overrides: &ParamValues) -> Result<ParamValues> {
        check_unique_names(params)?;

        let mut resolved = ParamValues::with_capacity(params.len());
        for param in params {
            let (value, source) = self.resolve_one(param, overrides, &resolved)?;
            tracing::debug!(param = param.name(), ?source, %value, "Resolved parameter");
            resolved.insert(param.name().to_string(), value);
        }

        Ok(resolved)
    }

    fn resolve_one(
        &mut self,
        param: &Param,
        overrides: &ParamValues,
        resolved: &ParamValues,
    ) -> Result<(ParamValue, ValueSource)> {
        if let Some(value) = overrides.get(param.name()) {
            let value = validate::accept(param, value.clone())?;
            return Ok((value, ValueSource::Override));
        }

        let default = resolve_default(param, resolved)?;

        match self.mode {
            ResolveMode::Interactive => {
                let answer = prompt_param(&mut *self.prompter, param, default.as_ref())?;
                Ok((validate::accept(param, answer)?, ValueSource::Prompt))
            }
            ResolveMode::NonInteractive => match default {
                Some(value) => Ok((value, ValueSource::Default)),
                None => Err(Error::MissingValue {
                    name: param.name().to_string(),
                }),
            },
        }
    }
}

/// Compute the default for `param` against the values resolved so far.
///
/// Returns `None` if the parameter declares no default. A declared default
/// that does not satisfy the parameter's own type is an error.
pub fn resolve_default(param: &Param, resolved: &ParamValues) -> Result<Option<ParamValue>> {
    let Some(default) = &param.spec().default else {
        return Ok(None);
    };

    let value = match default {
        ParamValue::String(expression) if expr::is_expression(default) => {
            for dependency in expr::dependencies(expression) {
                if !resolved.contains_key(&dependency) {
                    return Err(Error::MissingDependency {
                        expression: expression.clone(),
                        dependency,
                    });
                }
            }
            expr::resolve(default, param.param_type(), resolved)?
        }
        literal => literal.clone(),
    };

    validate::accept(param, value).map(Some)
}

fn check_unique_names(params: &[Param]) -> Result<()> {
    let mut seen = HashSet::with_capacity(params.len());
    for param in params {
        if !seen.insert(param.name()) {
            return Err(Error::DuplicateParam(param.name().to_string()));
        }
    }
    Ok(())
}

/// Resolve `params` against `overrides` with the default interactive mode.
pub fn resolve_params(
    params: &[Param],
    overrides: &ParamValues,
    prompter: &mut dyn Prompter,
) -> Result<ParamValues> {
    ParamResolver::new(prompter).resolve(params, overrides)
}
