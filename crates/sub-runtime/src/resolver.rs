use crate::commands::{CommandNode, DirectoryCommand, FileCommand};
use crate::config::Config;
use crate::{Error, Result};
use std::io;

/// Walk `tokens` down the command tree under the configured libexec directory.
///
/// Directories are descended greedily; the first file ends the walk and receives every
/// remaining token, untouched, as its residual arguments.
pub fn resolve<'a, S: AsRef<str>>(config: &'a Config, tokens: &[S]) -> Result<CommandNode<'a>> {
    let libexec = config.libexec_path();
    if !libexec.is_dir() {
        return Err(Error::LibexecNotFound(libexec));
    }

    let mut path = libexec;
    let mut segments: Vec<String> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if !is_resolvable(token) {
            return Err(Error::NoSuchSubCommand(token.to_string()));
        }

        let next = path.join(token);
        let metadata = match std::fs::metadata(&next) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NoSuchSubCommand(token.to_string()));
            }
            Err(err) => return Err(Error::Io(err)),
        };

        segments.push(token.to_string());

        if !metadata.is_dir() {
            let residual = tokens[index + 1..]
                .iter()
                .map(|arg| arg.as_ref().to_string())
                .collect();
            tracing::debug!(path = %next.display(), ?residual, "resolved file command");
            return Ok(CommandNode::File(FileCommand::new(config, segments, next, residual)));
        }

        path = next;
    }

    tracing::debug!(path = %path.display(), "resolved directory command");
    Ok(CommandNode::Directory(DirectoryCommand::new(config, segments, path)))
}

/// Hidden names, empty tokens and anything that would escape the current directory never resolve.
fn is_resolvable(token: &str) -> bool {
    !token.is_empty()
        && !token.starts_with('.')
        && !token.contains(['/', std::path::MAIN_SEPARATOR])
}
