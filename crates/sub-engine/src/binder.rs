//! Argument binder.
//!
//! Binds a raw argument vector against the slots declared by a usage line. Declared flags
//! are claimed and validated; every other token (unknown flags included) falls through to
//! the next free positional and then to the rest collection, so scripts keep control of
//! their own flag vocabulary.

use crate::error::{Error, Result};
use crate::spec::{ArgKind, ArgSpec};
use std::collections::{BTreeMap, HashMap, HashSet};

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Values bound for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundArguments {
    values: BTreeMap<String, String>,
    rest: Vec<String>,
}

impl BoundArguments {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Overflow tokens, in order. Empty unless the usage line declares a rest slot.
    pub fn rest(&self) -> &[String] {
        &self.rest
    }

    /// Serialize as `name "value"` pairs in declaration order.
    ///
    /// Values are double-quoted with `\`, `"`, `$` and `` ` `` escaped so the result can be
    /// `eval`ed by a shell script.
    pub fn to_env_value(&self, specs: &[ArgSpec]) -> String {
        let mut seen = HashSet::new();

        specs
            .iter()
            .filter(|spec| seen.insert(spec.name.as_str()))
            .filter_map(|spec| {
                self.values
                    .get(&spec.name)
                    .map(|value| format!("{} \"{}\"", spec.name, escape(value)))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn is_set(value: &str) -> bool {
    !value.is_empty() && value != FALSE
}

/// Bind `raw` against `specs`.
///
/// Valueless flags default to `"false"` so consumers can tell a declared-but-absent flag
/// from an unknown one. Using an exclusive flag waives the required-positional check, since
/// an exclusive flag must stand alone.
pub fn bind<S: AsRef<str>>(raw: &[S], specs: &[ArgSpec]) -> Result<BoundArguments> {
    let mut values: BTreeMap<String, String> = specs
        .iter()
        .filter(|spec| spec.is_flag() && !spec.has_value)
        .map(|spec| (spec.name.clone(), FALSE.to_string()))
        .collect();

    let positionals: Vec<&ArgSpec> = specs
        .iter()
        .filter(|spec| spec.kind == ArgKind::Positional)
        .collect();
    let rest_spec = specs.iter().find(|spec| spec.kind == ArgKind::Rest);
    let flags: HashMap<String, &ArgSpec> = specs
        .iter()
        .filter_map(|spec| spec.flag().map(|flag| (flag, spec)))
        .collect();

    let mut next_positional = positionals.iter();
    let mut exclusive: Option<&ArgSpec> = None;
    let mut rest = Vec::new();
    let mut args = raw.iter().map(AsRef::as_ref);

    while let Some(arg) = args.next() {
        if let Some((spec, inline)) = match_flag(arg, &flags) {
            let value = if !spec.has_value {
                Some(TRUE.to_string())
            } else if let Some(inline) = inline {
                Some(inline.to_string())
            } else {
                args.next().map(str::to_string)
            };

            if spec.exclusive {
                if let Some(previous) = exclusive {
                    return Err(Error::ExclusiveConflict(previous.to_string()));
                }
                exclusive = Some(spec);
            } else if let Some(active) = exclusive
                && value.as_deref().is_some_and(is_set)
            {
                return Err(Error::ExclusiveConflict(active.to_string()));
            }

            if let Some(value) = value {
                values.insert(spec.name.clone(), value);
            }
            continue;
        }

        match next_positional.next() {
            Some(spec) => {
                if let Some(active) = exclusive
                    && is_set(arg)
                {
                    return Err(Error::ExclusiveConflict(active.to_string()));
                }
                values.insert(spec.name.clone(), arg.to_string());
            }
            None => rest.push(arg.to_string()),
        }
    }

    if let Some(active) = exclusive {
        let set = values.values().filter(|value| is_set(value)).count();
        if set > 1 {
            return Err(Error::ExclusiveConflict(active.to_string()));
        }
    }

    if let Some(spec) = rest_spec
        && !rest.is_empty()
    {
        values.insert(spec.name.clone(), rest.join(" "));
    }

    if exclusive.is_none() {
        if let Some(missing) = positionals
            .iter()
            .find(|spec| spec.required && !values.contains_key(&spec.name))
        {
            return Err(Error::MissingRequired(missing.name.clone()));
        }
    }

    if rest_spec.is_none() {
        rest.clear();
    }

    tracing::trace!(?values, ?rest, "bound arguments");
    Ok(BoundArguments { values, rest })
}

/// Match `arg` against a declared flag. Long flags may carry an inline `=value`.
fn match_flag<'a, 's>(
    arg: &'a str,
    flags: &HashMap<String, &'s ArgSpec>,
) -> Option<(&'s ArgSpec, Option<&'a str>)> {
    if arg.starts_with("--") {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (arg, None),
        };
        let spec = *flags.get(flag)?;
        (spec.kind == ArgKind::Long).then_some((spec, inline))
    } else if arg.len() == 2 && arg.starts_with('-') {
        let spec = *flags.get(arg)?;
        (spec.kind == ArgKind::Short).then_some((spec, None))
    } else {
        None
    }
}
