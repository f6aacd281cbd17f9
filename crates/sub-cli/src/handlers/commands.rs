use crate::context::ExecutionContext;
use crate::presentation::listing::{CommandEntryView, has_extension};
use crate::types::OutputFormat;
use anyhow::Result;
use sub_runtime::CommandNode;

pub fn handle(ctx: &ExecutionContext, node: &CommandNode, extension: Option<&str>) -> Result<i32> {
    let entries: Vec<CommandEntryView> = node
        .subcommands()?
        .iter()
        .map(CommandEntryView::from)
        .filter(|entry| extension.is_none_or(|ext| has_extension(&entry.name, ext)))
        .collect();

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}", entry.name);
            }
        }
    }

    Ok(0)
}
