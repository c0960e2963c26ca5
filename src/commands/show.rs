use crate::cli::{Cli, ShowArgs};
use crate::error::{ApiSnapError, Result};
use crate::output::formatter_for;

use super::{CommandContext, CommandOutcome, execute};

/// Run the show command.
#[must_use]
pub fn run_show(args: &ShowArgs, cli: &Cli) -> i32 {
    execute(cli, |ctx| run_show_impl(args, ctx))
}

/// Print a stored snapshot.
///
/// # Errors
/// Returns [`ApiSnapError::SnapshotNotFound`] when nothing is stored for the
/// URL and method.
pub fn run_show_impl(args: &ShowArgs, ctx: &CommandContext) -> Result<CommandOutcome> {
    let method = args.target.method.to_uppercase();
    let record = ctx
        .store
        .load(&args.target.url, &method)?
        .ok_or_else(|| ApiSnapError::SnapshotNotFound {
            method,
            url: args.target.url.clone(),
        })?;

    let output = formatter_for(args.format, ctx.color).format_record(&record)?;
    Ok(CommandOutcome::success(output))
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
