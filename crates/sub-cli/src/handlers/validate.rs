use crate::context::ExecutionContext;
use crate::presentation::validation::render_plain;
use crate::types::OutputFormat;
use anyhow::Result;
use sub_runtime::CommandNode;

/// Exit code is 0 only when no problems were found.
pub fn handle(ctx: &ExecutionContext, node: &CommandNode) -> Result<i32> {
    let errors = node.validate()?;

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&errors)?),
        OutputFormat::Plain if !errors.is_empty() => println!("{}", render_plain(&errors)),
        OutputFormat::Plain => {}
    }

    Ok(if errors.is_empty() { 0 } else { 1 })
}
