use serde::Serialize;
use std::fmt;

/// Shape of a declared argument slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Positional,
    Short,
    Long,
    Rest,
}

/// One argument slot declared by a usage line.
///
/// `name` never carries its sigil: `[-u]` is stored as `u`, `[--value=VAL]` as `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgSpec {
    pub name: String,
    pub kind: ArgKind,
    pub required: bool,
    pub has_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_name: Option<String>,
    pub exclusive: bool,
}

impl ArgSpec {
    fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            has_value: false,
            value_name: None,
            exclusive: false,
        }
    }

    pub fn positional(name: impl Into<String>, required: bool) -> Self {
        Self {
            required,
            ..Self::new(name, ArgKind::Positional)
        }
    }

    pub fn short(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Short)
    }

    pub fn long(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Long)
    }

    pub fn long_with_value(name: impl Into<String>, value_name: impl Into<String>) -> Self {
        Self {
            has_value: true,
            value_name: Some(value_name.into()),
            ..Self::new(name, ArgKind::Long)
        }
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Rest)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark this slot as exclusive (`[...]!`). Rest slots are never exclusive.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = self.kind != ArgKind::Rest;
        self
    }

    pub fn is_flag(&self) -> bool {
        matches!(self.kind, ArgKind::Short | ArgKind::Long)
    }

    /// The exact token a user types to set this flag (`-u`, `--value`).
    pub fn flag(&self) -> Option<String> {
        match self.kind {
            ArgKind::Short => Some(format!("-{}", self.name)),
            ArgKind::Long => Some(format!("--{}", self.name)),
            ArgKind::Positional | ArgKind::Rest => None,
        }
    }
}

impl fmt::Display for ArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flag() {
            Some(flag) => f.write_str(&flag),
            None => f.write_str(&self.name),
        }
    }
}
