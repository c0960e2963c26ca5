//! Diagnostic logging on stderr.
//!
//! `API_SNAP_LOG` takes an `EnvFilter` directive (e.g. `api_snap=debug`) and
//! wins over the verbosity flags. User-facing output never goes through here.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "API_SNAP_LOG";

static INIT_ONCE: Once = Once::new();

/// Filter directive for the given CLI verbosity.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "api_snap=error";
    }
    match verbose {
        0 => "api_snap=warn",
        1 => "api_snap=info",
        2 => "api_snap=debug",
        _ => "api_snap=trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
