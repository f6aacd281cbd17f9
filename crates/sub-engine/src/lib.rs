// Engine module - usage-line grammar, argument binding and script metadata
// This layer knows nothing about the filesystem tree or process launching

pub mod binder;
pub mod docs;
pub mod error;
pub mod spec;
pub mod usage;

pub use binder::{BoundArguments, bind};
pub use docs::{UsageInfo, extract, extract_from_path, extract_from_reader};
pub use error::{Error, Result};
pub use spec::{ArgKind, ArgSpec};
pub use usage::{CMD_PLACEHOLDER, parse};

/// Render a usage template by substituting the `{cmd}` placeholder.
pub fn render_usage(template: &str, command: &str) -> String {
    template.replace(CMD_PLACEHOLDER, command)
}
