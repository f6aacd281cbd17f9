pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod launcher;
pub mod listing;
pub mod resolver;
pub mod validation;

pub use commands::{
    CommandKind, CommandNode, DirectoryCommand, FileCommand, HelpPage, HelpStyle, Invocation,
    Plain, SubcommandSummary,
};
pub use config::{Config, default_cache_dir, expand_tilde, normalize_path, resolve_root};
pub use env::{EnvNames, Environment};
pub use error::{Error, Result};
pub use launcher::{Captured, LaunchRequest, ProcessLauncher, SystemLauncher};
pub use resolver::resolve;
pub use validation::ValidationError;
