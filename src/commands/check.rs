use tracing::info;

use crate::cli::{CheckArgs, Cli};
use crate::error::{ApiSnapError, Result};
use crate::http::{HttpClient, ReqwestClient};
use crate::output::formatter_for;
use crate::report::{CheckOptions, CheckReport};
use crate::{EXIT_BREAKING, EXIT_SUCCESS};

use super::{CommandContext, CommandOutcome, build_request, execute};

/// Run the check command.
#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    execute(cli, |ctx| run_check_impl(args, ctx, &ReqwestClient))
}

/// Re-fetch the URL and diff the response against its stored snapshot.
///
/// Exit code is [`EXIT_BREAKING`] when any breaking difference is found.
///
/// # Errors
/// Returns an error if no snapshot exists, the request fails, or the
/// snapshot cannot be read.
pub fn run_check_impl(
    args: &CheckArgs,
    ctx: &CommandContext,
    client: &impl HttpClient,
) -> Result<CommandOutcome> {
    let request = build_request(&args.request, &ctx.config);

    let saved = ctx
        .store
        .load(&request.url, &request.method)?
        .ok_or_else(|| ApiSnapError::SnapshotNotFound {
            method: request.method.clone(),
            url: request.url.clone(),
        })?;

    let current = client.fetch(&request)?.into_record(&request);

    let options = CheckOptions {
        ignored_fields: ctx.config.ignored_fields_with(&args.ignore),
        ignore_headers: args.ignore_headers || ctx.config.ignore_headers,
    };
    let report = CheckReport::build(&saved, &current, &options);
    info!(
        url = %request.url,
        total = report.total_count,
        breaking = report.breaking_count,
        verdict = report.verdict().as_str(),
        "check complete"
    );

    let output = formatter_for(args.format, ctx.color).format_report(&saved, &report)?;
    let exit_code = if report.has_breaking() {
        EXIT_BREAKING
    } else {
        EXIT_SUCCESS
    };
    Ok(CommandOutcome { output, exit_code })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
