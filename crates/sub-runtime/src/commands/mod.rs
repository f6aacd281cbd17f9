//! The command tree.
//!
//! A node is either a directory (composite) or an executable file (leaf). Nodes are cheap
//! values created on demand; children are derived from the filesystem every time so the
//! tree on disk stays the source of truth.

mod directory;
mod file;
mod help;

pub use directory::DirectoryCommand;
pub use file::FileCommand;
pub use help::{HelpPage, HelpStyle, Plain, SubcommandSummary};

use crate::Result;
use crate::config::Config;
use crate::launcher::ProcessLauncher;
use crate::validation::ValidationError;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Directory,
    File,
}

/// Outcome of invoking a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A script ran; relay its exit code
    Exited(i32),
    /// A directory was invoked; show its help and succeed
    Help(HelpPage),
}

#[derive(Debug)]
pub enum CommandNode<'a> {
    Directory(DirectoryCommand<'a>),
    File(FileCommand<'a>),
}

impl<'a> CommandNode<'a> {
    /// Last path segment, or the tool name at the root
    pub fn name(&self) -> &str {
        match self {
            CommandNode::Directory(dir) => dir.name(),
            CommandNode::File(file) => file.name(),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            CommandNode::Directory(_) => CommandKind::Directory,
            CommandNode::File(_) => CommandKind::File,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            CommandNode::Directory(dir) => dir.path(),
            CommandNode::File(file) => file.path(),
        }
    }

    pub fn segments(&self) -> &[String] {
        match self {
            CommandNode::Directory(dir) => dir.segments(),
            CommandNode::File(file) => file.segments(),
        }
    }

    /// Tokens left over after path resolution. Always empty for directories.
    pub fn residual_args(&self) -> &[String] {
        match self {
            CommandNode::Directory(_) => &[],
            CommandNode::File(file) => file.residual_args(),
        }
    }

    pub fn summary(&self) -> Option<String> {
        match self {
            CommandNode::Directory(dir) => dir.summary(),
            CommandNode::File(file) => file.summary(),
        }
    }

    /// The full `Usage: ...` line
    pub fn usage(&self) -> String {
        match self {
            CommandNode::Directory(dir) => dir.usage(),
            CommandNode::File(file) => file.usage(),
        }
    }

    pub fn help(&self) -> Result<HelpPage> {
        match self {
            CommandNode::Directory(dir) => dir.help(),
            CommandNode::File(file) => Ok(file.help()),
        }
    }

    pub fn subcommands(&self) -> Result<Vec<CommandNode<'a>>> {
        match self {
            CommandNode::Directory(dir) => dir.subcommands(),
            CommandNode::File(_) => Ok(Vec::new()),
        }
    }

    pub fn completions(&self, launcher: &dyn ProcessLauncher) -> Result<Vec<String>> {
        match self {
            CommandNode::Directory(dir) => dir.completions(),
            CommandNode::File(file) => Ok(file.completions(launcher)),
        }
    }

    pub fn invoke(&self, launcher: &dyn ProcessLauncher) -> Result<Invocation> {
        match self {
            CommandNode::Directory(dir) => dir.help().map(Invocation::Help),
            CommandNode::File(file) => file.invoke(launcher).map(Invocation::Exited),
        }
    }

    pub fn validate(&self) -> Result<Vec<ValidationError>> {
        match self {
            CommandNode::Directory(dir) => dir.validate(),
            CommandNode::File(file) => Ok(file.validate()),
        }
    }
}

/// `tool seg1 seg2`, the prefix substituted for `{cmd}`
fn qualified_name(config: &Config, segments: &[String]) -> String {
    std::iter::once(config.name.as_str())
        .chain(segments.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
