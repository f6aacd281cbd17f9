use super::{CommandNode, FileCommand, HelpPage, SubcommandSummary, qualified_name};
use crate::Result;
use crate::config::Config;
use crate::listing::{self, EntryKind};
use crate::validation::ValidationError;
use std::path::{Path, PathBuf};
use sub_engine::UsageInfo;

const README: &str = "README";

/// A directory in the command tree.
#[derive(Debug, Clone)]
pub struct DirectoryCommand<'a> {
    config: &'a Config,
    segments: Vec<String>,
    path: PathBuf,
}

impl<'a> DirectoryCommand<'a> {
    pub fn new(config: &'a Config, segments: Vec<String>, path: PathBuf) -> Self {
        Self {
            config,
            segments,
            path,
        }
    }

    pub fn root(config: &'a Config) -> Self {
        Self::new(config, Vec::new(), config.libexec_path())
    }

    pub fn name(&self) -> &str {
        self.segments
            .last()
            .map_or(self.config.name.as_str(), String::as_str)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Metadata from the directory's README comment block, if any
    fn readme(&self) -> Option<UsageInfo> {
        let readme = self.path.join(README);
        if !readme.is_file() {
            return None;
        }
        match sub_engine::extract_from_path(&readme) {
            Ok(info) => Some(info),
            Err(err) => {
                tracing::debug!(path = %readme.display(), %err, "unreadable README");
                None
            }
        }
    }

    pub fn summary(&self) -> Option<String> {
        self.readme().and_then(|info| info.summary)
    }

    pub fn usage(&self) -> String {
        format!(
            "Usage: {} [<subcommands>] [<args>]",
            qualified_name(self.config, &self.segments)
        )
    }

    pub fn help(&self) -> Result<HelpPage> {
        let readme = self.readme().unwrap_or_default();

        let mut subcommands: Vec<SubcommandSummary> = self
            .subcommands()?
            .iter()
            .map(|sub| SubcommandSummary {
                name: sub.name().to_string(),
                summary: sub.summary(),
            })
            .collect();
        subcommands.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(HelpPage {
            usage: self.usage(),
            summary: readme.summary,
            body: readme.help,
            subcommands,
        })
    }

    /// Children in filesystem enumeration order
    pub fn subcommands(&self) -> Result<Vec<CommandNode<'a>>> {
        let entries = listing::list_entries(&self.path)?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let mut segments = self.segments.clone();
                segments.push(entry.name);
                match entry.kind {
                    EntryKind::Directory => {
                        CommandNode::Directory(DirectoryCommand::new(self.config, segments, entry.path))
                    }
                    EntryKind::Executable => CommandNode::File(FileCommand::new(
                        self.config,
                        segments,
                        entry.path,
                        Vec::new(),
                    )),
                }
            })
            .collect())
    }

    pub fn completions(&self) -> Result<Vec<String>> {
        Ok(self
            .subcommands()?
            .iter()
            .map(|sub| sub.name().to_string())
            .collect())
    }

    /// Validate every descendant, collecting all problems.
    ///
    /// A directory that cannot be listed is reported as a problem of its own and the walk
    /// carries on with its siblings.
    pub fn validate(&self) -> Result<Vec<ValidationError>> {
        let children = match self.subcommands() {
            Ok(children) => children,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "cannot list directory");
                return Ok(vec![ValidationError {
                    path: self.path.clone(),
                    message: format!("cannot list directory: {}", err),
                }]);
            }
        };

        let mut errors = Vec::new();
        for sub in children {
            errors.extend(sub.validate()?);
        }
        Ok(errors)
    }
}
