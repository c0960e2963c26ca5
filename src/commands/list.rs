use crate::cli::{Cli, ListArgs};
use crate::error::Result;
use crate::output::formatter_for;

use super::{CommandContext, CommandOutcome, execute};

/// Run the list command.
#[must_use]
pub fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    execute(cli, |ctx| run_list_impl(args, ctx))
}

/// List every readable snapshot in the storage directory.
///
/// # Errors
/// Returns an error if the storage directory exists but cannot be read.
pub fn run_list_impl(args: &ListArgs, ctx: &CommandContext) -> Result<CommandOutcome> {
    let summaries = ctx.store.list()?;
    let output = formatter_for(args.format, ctx.color).format_list(ctx.store.root(), &summaries)?;
    Ok(CommandOutcome::success(output))
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
