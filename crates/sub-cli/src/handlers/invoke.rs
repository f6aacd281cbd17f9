use crate::context::ExecutionContext;
use anyhow::Result;
use sub_runtime::{CommandNode, Invocation};

pub fn handle(ctx: &ExecutionContext, node: &CommandNode) -> Result<i32> {
    match node.invoke(ctx.launcher())? {
        Invocation::Exited(code) => {
            tracing::debug!(code, "script exited");
            Ok(code)
        }
        Invocation::Help(page) => {
            println!("{}", page.render(ctx.help_style()));
            Ok(0)
        }
    }
}
