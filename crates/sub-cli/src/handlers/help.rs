use crate::context::ExecutionContext;
use anyhow::Result;
use sub_runtime::CommandNode;

pub fn handle(ctx: &ExecutionContext, node: &CommandNode) -> Result<i32> {
    let page = node.help()?;
    println!("{}", page.render(ctx.help_style()));
    Ok(0)
}
