//! Subcommand implementations.
//!
//! Each command has a `run_*` entry point returning the process exit code and
//! a `run_*_impl` that does the work against injected collaborators and
//! returns the text to print.

mod check;
mod context;
mod delete;
mod list;
mod save;
mod show;

#[cfg(test)]
mod test_support;

pub use check::{run_check, run_check_impl};
pub use context::{CommandContext, build_request};
pub use delete::{run_delete, run_delete_impl};
pub use list::{run_list, run_list_impl};
pub use save::{run_save, run_save_impl};
pub use show::{run_show, run_show_impl};

use crate::cli::Cli;
use crate::error::{ApiSnapError, Result};
use crate::output::{ColorMode, print_error};
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// What a command produced: text for stdout and the exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub output: String,
    pub exit_code: i32,
}

impl CommandOutcome {
    #[must_use]
    pub const fn success(output: String) -> Self {
        Self {
            output,
            exit_code: EXIT_SUCCESS,
        }
    }
}

/// Resolve the context, run the command, print its output, map errors to exit codes.
fn execute(cli: &Cli, run: impl FnOnce(&CommandContext) -> Result<CommandOutcome>) -> i32 {
    let color: ColorMode = cli.color.into();
    match CommandContext::from_cli(cli).and_then(|ctx| run(&ctx)) {
        Ok(outcome) => {
            if !cli.quiet {
                print!("{}", outcome.output);
            }
            outcome.exit_code
        }
        Err(e) => {
            report_error(&e, color);
            EXIT_FAILURE
        }
    }
}

fn report_error(err: &ApiSnapError, color: ColorMode) {
    tracing::debug!(error = ?err, "command failed");
    print_error(err, color);
}
