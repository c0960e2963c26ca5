use tracing::info;

use crate::cli::{Cli, SaveArgs};
use crate::error::Result;
use crate::http::{HttpClient, ReqwestClient};
use crate::output::print_warning;

use super::{CommandContext, CommandOutcome, build_request, execute};

/// Run the save command.
#[must_use]
pub fn run_save(args: &SaveArgs, cli: &Cli) -> i32 {
    execute(cli, |ctx| run_save_impl(args, ctx, &ReqwestClient))
}

/// Fetch the URL and persist the response, replacing any earlier snapshot.
///
/// # Errors
/// Returns an error if the URL is invalid, the request fails, or the
/// snapshot cannot be written.
pub fn run_save_impl(
    args: &SaveArgs,
    ctx: &CommandContext,
    client: &impl HttpClient,
) -> Result<CommandOutcome> {
    let request = build_request(&args.request, &ctx.config);
    // Reject unkeyable URLs before touching the network.
    ctx.store.path_for(&request.url, &request.method)?;

    let response = client.fetch(&request)?;
    if !(200..300).contains(&response.status) {
        print_warning(
            &format!("saving a non-success response (HTTP {})", response.status),
            ctx.color,
        );
    }

    let record = response.into_record(&request);
    let path = ctx.store.save(&record)?;
    info!(url = %record.url, method = %record.method, path = %path.display(), "snapshot saved");

    Ok(CommandOutcome::success(format!(
        "Saved {} {} -> {} to {}\n",
        record.method,
        record.url,
        record.status,
        path.display()
    )))
}

#[cfg(test)]
#[path = "save_tests.rs"]
mod tests;
