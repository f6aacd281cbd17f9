// NOTE: sub layering
//
// sub-engine  - usage-line grammar, argument binding, comment-block metadata
// sub-runtime - command tree, resolution, launching, validation
// sub (here)  - dispatcher flags, per-tool flags, presentation, exit codes
//
// The binary is meant to be wrapped by a tool-specific shim:
//   exec sub --name tool --executable "$0" --relative .. -- "$@"

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Mode, UserCli, report_parse_error};
pub use commands::run;
