use tracing::info;

use crate::cli::{Cli, DeleteArgs};
use crate::error::{ApiSnapError, Result};
use crate::snapshot::DeleteOutcome;

use super::{CommandContext, CommandOutcome, execute};

/// Run the delete command.
#[must_use]
pub fn run_delete(args: &DeleteArgs, cli: &Cli) -> i32 {
    execute(cli, |ctx| run_delete_impl(args, ctx))
}

/// Remove the stored snapshot for a URL and method.
///
/// # Errors
/// Returns [`ApiSnapError::SnapshotNotFound`] if there is nothing to delete.
pub fn run_delete_impl(args: &DeleteArgs, ctx: &CommandContext) -> Result<CommandOutcome> {
    let method = args.target.method.to_uppercase();
    match ctx.store.delete(&args.target.url, &method)? {
        DeleteOutcome::Deleted(path) => {
            info!(url = %args.target.url, method = %method, "snapshot deleted");
            Ok(CommandOutcome::success(format!(
                "Deleted snapshot {}\n",
                path.display()
            )))
        }
        DeleteOutcome::NotFound => Err(ApiSnapError::SnapshotNotFound {
            method,
            url: args.target.url.clone(),
        }),
    }
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
