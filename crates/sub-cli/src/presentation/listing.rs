use serde::Serialize;
use std::path::Path;
use sub_runtime::{CommandKind, CommandNode};

/// One row of `--commands` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntryView {
    pub name: String,
    pub summary: Option<String>,
    pub kind: CommandKind,
}

impl From<&CommandNode<'_>> for CommandEntryView {
    fn from(node: &CommandNode<'_>) -> Self {
        Self {
            name: node.name().to_string(),
            summary: node.summary(),
            kind: node.kind(),
        }
    }
}

/// True when `name` has exactly the extension `ext` (given without its dot).
pub fn has_extension(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|found| found == ext)
}
