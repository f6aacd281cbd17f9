use crate::context::ExecutionContext;
use anyhow::Result;
use sub_runtime::CommandNode;

pub fn handle(ctx: &ExecutionContext, node: &CommandNode) -> Result<i32> {
    println!("{}", ctx.help_style().usage(&node.usage()));
    Ok(0)
}
