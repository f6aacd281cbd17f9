// NOTE: Two parsers
//
// `Cli` parses sub's own flags, which a tool's shim passes before `--`.
// `UserCli` parses what the tool's user typed, after `--`. It is built at runtime
// so that its name, error messages and flag inference follow the tool, not sub.

mod user;

pub use user::{Mode, UserCli};

/// Print a clap error, or the help/version text it carries, and return the exit code it implies.
pub fn report_parse_error(err: &clap::Error) -> i32 {
    if let Err(io_err) = err.print() {
        tracing::debug!(%io_err, "failed to print parse error");
    }
    parse_error_code(err)
}

fn parse_error_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

use crate::types::{ColorChoice, LogLevel};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "sub")]
#[command(about = "Turn a directory of scripts into a git-style command-line tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Name of the tool, used in usage lines and environment variables")]
    pub name: String,

    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["executable", "relative"],
        required_unless_present = "executable",
        help = "Absolute path to the tool root (the directory containing libexec)"
    )]
    pub absolute: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        requires = "relative",
        help = "Path of the invoking executable, usually \"$0\" in the shim"
    )]
    pub executable: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        requires = "executable",
        help = "Tool root relative to the executable's directory"
    )]
    pub relative: Option<String>,

    #[arg(long, default_value = "auto", help = "When to color help output")]
    pub color: ColorChoice,

    #[arg(long, help = "Accept unambiguous prefixes of the tool's long flags")]
    pub infer_long_arguments: bool,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(last = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_codes() {
        let err = Cli::try_parse_from(["sub", "--version"]).unwrap_err();
        assert_eq!(parse_error_code(&err), 0);

        let err = Cli::try_parse_from(["sub", "--absolute", "/opt/tool"]).unwrap_err();
        assert_eq!(parse_error_code(&err), 1);

        let err = UserCli::parse_for("tool", false, ColorChoice::Never, ["--usage", "--help"])
            .unwrap_err();
        assert_eq!(parse_error_code(&err), 1);
    }
}
