use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "api-snap")]
#[command(author, version, about = "Snapshot HTTP responses and detect breaking API changes")]
#[command(long_about = "Saves HTTP responses as JSON snapshots and diffs later responses \
    against them, classifying each difference as breaking or non-breaking.\n\n\
    Exit codes:\n  \
    0 - No breaking changes / command succeeded\n  \
    1 - Breaking changes detected or command failed")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot storage directory (overrides config)
    #[arg(short = 'd', long = "dir", global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a URL and store the response as a snapshot
    Save(SaveArgs),

    /// Fetch a URL and compare the response against its snapshot
    Check(CheckArgs),

    /// List stored snapshots
    List(ListArgs),

    /// Print a stored snapshot
    Show(ShowArgs),

    /// Delete a stored snapshot
    Delete(DeleteArgs),
}

/// Identifies a snapshot.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Absolute request URL
    pub url: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,
}

/// Describes the request to send.
#[derive(Args, Debug)]
pub struct RequestArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Request header as 'Name: value' (can be specified multiple times)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(long, visible_alias = "data")]
    pub body: Option<String>,

    /// Request timeout in milliseconds (invalid values fall back to 10000)
    #[arg(short, long)]
    pub timeout: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Field names to ignore when diffing (comma-separated, repeatable)
    #[arg(short, long = "ignore", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Do not compare response headers
    #[arg(long)]
    pub ignore_headers: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
