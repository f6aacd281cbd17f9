//! Environment contract between the dispatcher and the scripts it runs.
//!
//! Variables are built into an explicit map per launch and handed to the launcher;
//! the dispatcher's own process environment is never modified.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

/// Variable names derived from the upper-cased tool name (`my-tool` -> `_MY-TOOL_ROOT`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvNames {
    prefix: String,
}

impl EnvNames {
    pub fn new(tool_name: &str) -> Self {
        Self {
            prefix: format!("_{}_", tool_name.to_uppercase()),
        }
    }

    pub fn root(&self) -> String {
        self.name("ROOT")
    }

    pub fn cache(&self) -> String {
        self.name("CACHE")
    }

    pub fn args(&self) -> String {
        self.name("ARGS")
    }

    pub fn complete(&self) -> String {
        self.name("COMPLETE")
    }

    pub fn complete_arg(&self) -> String {
        self.name("COMPLETE_ARG")
    }

    fn name(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }
}

/// Variables added on top of the inherited environment for one launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, OsString>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn set_path(&mut self, key: impl Into<String>, value: &Path) -> &mut Self {
        self.set(key, value.as_os_str())
    }

    pub fn get(&self, key: &str) -> Option<&OsString> {
        self.vars.get(key)
    }

    /// Lossy string view of a variable, mostly for tests and logging
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.to_string_lossy().into_owned())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OsString)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
