//! Usage-line parser.
//!
//! A usage line is free-form documentation written by script authors, e.g.
//! `{cmd} <name> [-u] [--value=VAL] [--force]! [args]...`. Only the token shapes the
//! dispatcher binds are turned into [`ArgSpec`]s; anything else is skipped so that a
//! decorative or malformed token never breaks help output.

use crate::spec::{ArgKind, ArgSpec};

/// Placeholder substituted with the fully-qualified command path at render time
pub const CMD_PLACEHOLDER: &str = "{cmd}";

const ELLIPSIS: &str = "...";

/// Parse a usage line into its ordered argument slots.
///
/// At most one rest slot is kept; later rest tokens are ignored.
pub fn parse(usage: &str) -> Vec<ArgSpec> {
    let tokens: Vec<&str> = usage.split_whitespace().collect();
    let mut specs: Vec<ArgSpec> = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        index += 1;

        if token == CMD_PLACEHOLDER {
            continue;
        }

        let spec = if let Some(name) = enclosed(token, "<", ">") {
            non_empty(name).map(|name| ArgSpec::positional(name, true))
        } else if let Some(inner) = enclosed(token, "[", "]...") {
            rest(inner)
        } else if let Some(inner) = enclosed(token, "[", "]") {
            if tokens.get(index) == Some(&ELLIPSIS) {
                index += 1;
                rest(inner)
            } else if inner.ends_with(ELLIPSIS) {
                rest(inner)
            } else {
                classify_optional(inner)
            }
        } else if let Some(inner) = enclosed(token, "[", "]!") {
            classify_optional(inner).map(ArgSpec::exclusive)
        } else if token.starts_with("--") && token.contains('=') {
            long_with_value(&token[2..]).map(ArgSpec::required)
        } else {
            None
        };

        match spec {
            Some(spec) if spec.kind == ArgKind::Rest && has_rest(&specs) => {
                tracing::trace!(token, "ignoring second rest argument in usage line");
            }
            Some(spec) => specs.push(spec),
            None => tracing::trace!(token, "ignoring unrecognized usage token"),
        }
    }

    specs
}

fn enclosed<'a>(token: &'a str, open: &str, close: &str) -> Option<&'a str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

fn non_empty(name: &str) -> Option<&str> {
    if name.is_empty() { None } else { Some(name) }
}

fn has_rest(specs: &[ArgSpec]) -> bool {
    specs.iter().any(|spec| spec.kind == ArgKind::Rest)
}

fn rest(inner: &str) -> Option<ArgSpec> {
    let name = inner.strip_suffix(ELLIPSIS).unwrap_or(inner);
    let name = enclosed(name, "<", ">").unwrap_or(name);
    non_empty(name).map(ArgSpec::rest)
}

/// Classify the inside of `[...]`: short flag, long flag (with or without value) or optional positional.
fn classify_optional(inner: &str) -> Option<ArgSpec> {
    if let Some(body) = inner.strip_prefix("--") {
        if body.contains('=') {
            long_with_value(body)
        } else {
            non_empty(body).map(ArgSpec::long)
        }
    } else if let Some(body) = inner.strip_prefix('-') {
        non_empty(body).map(ArgSpec::short)
    } else {
        let name = enclosed(inner, "<", ">").unwrap_or(inner);
        non_empty(name).map(|name| ArgSpec::positional(name, false))
    }
}

fn long_with_value(body: &str) -> Option<ArgSpec> {
    let (name, value_name) = body.split_once('=')?;
    non_empty(name).map(|name| ArgSpec::long_with_value(name, value_name))
}
