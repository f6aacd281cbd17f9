use crate::context::ExecutionContext;
use anyhow::Result;
use sub_runtime::CommandNode;

pub fn handle(ctx: &ExecutionContext, node: &CommandNode) -> Result<i32> {
    for candidate in node.completions(ctx.launcher())? {
        println!("{}", candidate);
    }
    Ok(0)
}
