//! Script fixtures. All of them target a tool named `tool`, so they read `_TOOL_*` variables.

/// Declares a required positional and a flag, prints what it received.
pub const GREET: &str = r#"#!/bin/sh
# Summary: Greets someone
# Usage: {cmd} <name> [--loud]
#
# Prints a greeting for NAME.
echo "args: $_TOOL_ARGS"
echo "argv: $*"
"#;

/// Only a rest slot, so arguments pass through untouched.
pub const ECHO: &str = r#"#!/bin/sh
# Summary: Echoes its arguments
# Usage: {cmd} [words]...
echo "$_TOOL_ARGS"
"#;

/// Prints the root and cache variables.
pub const ENV: &str = r#"#!/bin/sh
# Summary: Shows the environment contract
echo "root: $_TOOL_ROOT"
echo "cache: $_TOOL_CACHE"
"#;

/// Exits with the code given as its first argument.
pub const EXIT: &str = r#"#!/bin/sh
# Usage: {cmd} <code>
exit "$1"
"#;

/// Offers completions filtered by the completion hint.
pub const COMPLETER: &str = r#"#!/bin/sh
# Summary: Completes fruit names
if [ "$_TOOL_COMPLETE" = "true" ]; then
  for fruit in apple apricot banana; do
    case "$fruit" in
      "$_TOOL_COMPLETE_ARG"*) echo "$fruit" ;;
    esac
  done
  exit 0
fi
echo "not completing"
"#;

/// Usage line with an unmatched angle bracket.
pub const BROKEN_USAGE: &str = r#"#!/bin/sh
# Usage: {cmd} <name
"#;

/// A README giving a directory its summary and help body.
pub const README: &str = r#"# Summary: Database tasks
#
# Commands that manage the database.
"#;

pub fn plain(summary: &str) -> String {
    format!("#!/bin/sh\n# Summary: {}\n", summary)
}
