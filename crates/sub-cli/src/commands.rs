use super::args::{Cli, Mode, UserCli, report_parse_error};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use sub_runtime::{Config, resolve_root};

/// Run one dispatch and return the process exit code.
///
/// Errors returned here are configuration problems; dispatch failures (unknown command,
/// binding, launching) are reported as `<tool>: <message>` and turned into exit code 1.
pub fn run(cli: Cli) -> Result<i32> {
    logging::init(cli.log_level)?;

    let root = resolve_root(
        cli.absolute.as_deref(),
        cli.executable.as_deref(),
        cli.relative.as_deref(),
    )?;
    let config = Config::new(&cli.name, root);
    tracing::debug!(?config, "configured");

    let user = match UserCli::parse_for(&cli.name, cli.infer_long_arguments, cli.color, &cli.args) {
        Ok(user) => user,
        Err(err) => return Ok(report_parse_error(&err)),
    };

    let mode = user.mode();
    let ctx = ExecutionContext::new(config, cli.color, user.format);

    let result = sub_runtime::resolve(ctx.config(), &user.commands_with_args)
        .map_err(anyhow::Error::from)
        .and_then(|node| match mode {
            Mode::Invoke => handlers::invoke::handle(&ctx, &node),
            Mode::Usage => handlers::usage::handle(&ctx, &node),
            Mode::Help => handlers::help::handle(&ctx, &node),
            Mode::Commands => handlers::commands::handle(&ctx, &node, user.extension()),
            Mode::Completions => handlers::completions::handle(&ctx, &node),
            Mode::Validate => handlers::validate::handle(&ctx, &node),
        });

    match result {
        Ok(code) => Ok(code),
        Err(err) => match err.downcast_ref::<sub_runtime::Error>() {
            Some(dispatch_err) => {
                if mode != Mode::Completions {
                    eprintln!("{}: {}", ctx.tool_name(), dispatch_err);
                }
                Ok(1)
            }
            None => Err(err),
        },
    }
}
