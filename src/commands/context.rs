use tracing::debug;

use crate::cli::{Cli, RequestArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::http::{RequestSpec, parse_header_args, parse_timeout};
use crate::output::ColorMode;
use crate::snapshot::SnapshotStore;

/// Settings shared by every command, resolved from config and global flags.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub store: SnapshotStore,
    pub color: ColorMode,
    pub quiet: bool,
}

impl CommandContext {
    /// Load configuration and apply global CLI overrides.
    ///
    /// # Errors
    /// Returns an error if a configuration file cannot be read or parsed.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli)?;
        Ok(Self::with_config(config, cli))
    }

    #[must_use]
    pub fn with_config(mut config: Config, cli: &Cli) -> Self {
        if let Some(dir) = &cli.dir {
            config.storage_dir.clone_from(dir);
        }
        debug!(storage_dir = %config.storage_dir.display(), "resolved storage directory");
        Self {
            store: SnapshotStore::new(config.storage_dir.clone()),
            config,
            color: cli.color.into(),
            quiet: cli.quiet,
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Build the outgoing request from CLI arguments on top of configured defaults.
///
/// Configured headers come first; `--header` values replace configured ones
/// with the same name.
#[must_use]
pub fn build_request(args: &RequestArgs, config: &Config) -> RequestSpec {
    let mut request = RequestSpec::new(args.target.url.clone(), &args.target.method);

    request.headers.clone_from(&config.headers);
    for (name, value) in parse_header_args(&args.headers) {
        request
            .headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        request.headers.insert(name, value);
    }

    request.body.clone_from(&args.body);
    request.timeout_ms = args
        .timeout
        .as_deref()
        .map_or(config.timeout_ms, parse_timeout);
    request
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
