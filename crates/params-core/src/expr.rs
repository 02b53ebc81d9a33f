//! Reference expressions inside parameter fields.
//!
//! A field is an expression when it is a string containing both `{{` and
//! `}}`. The only supported expression is the identity form
//! `{{ params.NAME }}`, which evaluates to the already resolved value of
//! parameter `NAME`. Anything else between the delimiters is rejected
//! rather than evaluated.
//!
//! Fields are tokenized on the delimiters and parsed into a list of
//! [`Node`]s. String fields may embed a single reference inside literal text
//! (`"gs://{{ params.BUCKET }}"`); int and boolean fields must be a bare
//! reference.

use crate::error::{Error, Result};
use crate::param::ParamType;
use crate::value::{ParamValue, ParamValues, ValueKind};

/// Opening expression delimiter.
pub const OPEN: &str = "{{";
/// Closing expression delimiter.
pub const CLOSE: &str = "}}";

const REFERENCE_PREFIX: &str = "params.";

/// A parsed piece of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text outside any delimiters.
    Literal(String),
    /// `{{ params.NAME }}`, holding `NAME`.
    ParamReference(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Text(&'a str),
}

/// Whether `field` is a reference expression rather than a literal.
pub fn is_expression(field: &ParamValue) -> bool {
    field.as_str().is_some_and(has_delimiters)
}

fn has_delimiters(s: &str) -> bool {
    s.contains(OPEN) && s.contains(CLOSE)
}

fn tokenize(src: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = src;

    while !rest.is_empty() {
        let next = match (rest.find(OPEN), rest.find(CLOSE)) {
            (Some(open), Some(close)) if close < open => Some((close, Token::Close)),
            (Some(open), _) => Some((open, Token::Open)),
            (None, Some(close)) => Some((close, Token::Close)),
            (None, None) => None,
        };

        match next {
            Some((idx, token)) => {
                if idx > 0 {
                    tokens.push(Token::Text(&rest[..idx]));
                }
                tokens.push(token);
                rest = &rest[idx + 2..];
            }
            None => {
                tokens.push(Token::Text(rest));
                break;
            }
        }
    }

    tokens
}

/// Parse a field into literal text and parameter references.
///
/// At most one reference is accepted.
pub fn parse(src: &str) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut tokens = tokenize(src).into_iter();

    while let Some(token) = tokens.next() {
        match token {
            Token::Text(text) => nodes.push(Node::Literal(text.to_string())),
            Token::Close => return Err(unsupported(src, "unmatched '}}'")),
            Token::Open => {
                let content = match tokens.next() {
                    Some(Token::Text(text)) => text,
                    Some(Token::Close) => return Err(unsupported(src, "empty expression")),
                    Some(Token::Open) => return Err(unsupported(src, "nested '{{'")),
                    None => return Err(unsupported(src, "unterminated '{{'")),
                };
                match tokens.next() {
                    Some(Token::Close) => {}
                    Some(Token::Open) => return Err(unsupported(src, "nested '{{'")),
                    _ => return Err(unsupported(src, "unterminated '{{'")),
                }
                nodes.push(parse_reference(src, content)?);
            }
        }
    }

    let references = nodes
        .iter()
        .filter(|node| matches!(node, Node::ParamReference(_)))
        .count();
    if references > 1 {
        return Err(unsupported(src, "multiple parameter references"));
    }

    Ok(nodes)
}

fn parse_reference(src: &str, content: &str) -> Result<Node> {
    let name = content
        .trim()
        .strip_prefix(REFERENCE_PREFIX)
        .filter(|name| !name.is_empty())
        .filter(|name| name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));

    match name {
        Some(name) => Ok(Node::ParamReference(name.to_string())),
        None => Err(unsupported(
            src,
            "only the identity form '{{ params.NAME }}' is supported",
        )),
    }
}

fn unsupported(expression: &str, reason: &str) -> Error {
    Error::UnsupportedExpression {
        expression: expression.to_string(),
        reason: reason.to_string(),
    }
}

/// Names of the parameters an expression references.
///
/// Every `params.NAME` inside delimiters is reported, whether or not the
/// surrounding expression is supported, so availability can be checked
/// before evaluation. A field without delimiters references nothing.
pub fn dependencies(expression: &str) -> Vec<String> {
    if !has_delimiters(expression) {
        return Vec::new();
    }

    let mut names = Vec::new();
    let mut inside = false;
    for token in tokenize(expression) {
        match token {
            Token::Open => inside = true,
            Token::Close => inside = false,
            Token::Text(text) if inside => collect_references(text, &mut names),
            Token::Text(_) => {}
        }
    }
    names
}

fn collect_references(text: &str, names: &mut Vec<String>) {
    let mut rest = text;
    while let Some(idx) = rest.find(REFERENCE_PREFIX) {
        let after = &rest[idx + REFERENCE_PREFIX.len()..];
        let end = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let preceded_by_ident = rest[..idx]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        if end > 0 && !preceded_by_ident {
            names.push(after[..end].to_string());
        }
        rest = &after[end..];
    }
}

fn lookup<'v>(
    expression: &str,
    name: &str,
    values: &'v ParamValues,
    kind: ValueKind,
) -> Result<&'v ParamValue> {
    let value = values.get(name).ok_or_else(|| Error::MissingDependency {
        expression: expression.to_string(),
        dependency: name.to_string(),
    })?;

    if value.kind() != kind {
        return Err(Error::TypeMismatch {
            name: name.to_string(),
            expected: kind,
            found: value.clone(),
        });
    }

    Ok(value)
}

/// Evaluate a bare `{{ params.NAME }}` expression to a value of `kind`.
fn resolve_identity(expression: &str, values: &ParamValues, kind: ValueKind) -> Result<ParamValue> {
    let nodes = parse(expression)?;
    let mut reference = None;
    for node in &nodes {
        match node {
            Node::ParamReference(name) => reference = Some(name),
            Node::Literal(text) if text.trim().is_empty() => {}
            Node::Literal(_) => {
                return Err(unsupported(
                    expression,
                    "text around a reference is only supported for string values",
                ));
            }
        }
    }

    match reference {
        Some(name) => lookup(expression, name, values, kind).cloned(),
        None => Err(unsupported(expression, "no parameter reference")),
    }
}

/// Resolve a string field, substituting a `{{ params.NAME }}` reference.
pub fn resolve_string(field: &str, values: &ParamValues) -> Result<String> {
    if !has_delimiters(field) {
        return Ok(field.to_string());
    }

    let mut output = String::with_capacity(field.len());
    for node in parse(field)? {
        match node {
            Node::Literal(text) => output.push_str(&text),
            Node::ParamReference(name) => {
                if let ParamValue::String(value) = lookup(field, &name, values, ValueKind::String)? {
                    output.push_str(value);
                }
            }
        }
    }

    if output.contains(OPEN) || output.contains(CLOSE) {
        return Err(unsupported(field, "delimiters remain after substitution"));
    }

    Ok(output)
}

/// Resolve an int field. Anything that is not an expression is returned
/// unchanged for the caller to validate.
pub fn resolve_int(field: &ParamValue, values: &ParamValues) -> Result<ParamValue> {
    match field {
        ParamValue::String(s) if has_delimiters(s) => resolve_identity(s, values, ValueKind::Int),
        literal => Ok(literal.clone()),
    }
}

/// Resolve a boolean field. Anything that is not an expression is returned
/// unchanged for the caller to validate.
pub fn resolve_boolean(field: &ParamValue, values: &ParamValues) -> Result<ParamValue> {
    match field {
        ParamValue::String(s) if has_delimiters(s) => resolve_identity(s, values, ValueKind::Bool),
        literal => Ok(literal.clone()),
    }
}

/// Resolve a field for a parameter of type `param_type`.
pub fn resolve(field: &ParamValue, param_type: ParamType, values: &ParamValues) -> Result<ParamValue> {
    match param_type {
        ParamType::String => match field {
            ParamValue::String(s) => resolve_string(s, values).map(ParamValue::String),
            literal => Ok(literal.clone()),
        },
        ParamType::Int => resolve_int(field, values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("a{{ params.X }}b"),
            vec![
                Token::Text("a"),
                Token::Open,
                Token::Text(" params.X "),
                Token::Close,
                Token::Text("b"),
            ]
        );
        assert_eq!(tokenize("}}{{"), vec![Token::Close, Token::Open]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_parse_identity() {
        assert_eq!(
            parse("{{ params.FOO_1 }}").unwrap(),
            vec![Node::ParamReference("FOO_1".to_string())]
        );
        assert_eq!(
            parse("{{params.FOO}}").unwrap(),
            vec![Node::ParamReference("FOO".to_string())]
        );
    }

    #[test]
    fn test_parse_embedded_reference() {
        assert_eq!(
            parse("gs://{{ params.BUCKET }}/data").unwrap(),
            vec![
                Node::Literal("gs://".to_string()),
                Node::ParamReference("BUCKET".to_string()),
                Node::Literal("/data".to_string()),
            ]
        );
    }

    #[test]
    fn test_is_expression() {
        assert!(is_expression(&ParamValue::from("{{ params.A }}")));
        assert!(!is_expression(&ParamValue::from("{{ params.A")));
        assert!(!is_expression(&ParamValue::Int(3)));
    }
}
