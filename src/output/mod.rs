mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::CheckReport;
use crate::snapshot::{SnapshotRecord, SnapshotSummary};

/// Trait for rendering command results.
pub trait OutputFormatter {
    /// Render a check report. `saved` is the snapshot the report compares against.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format_report(&self, saved: &SnapshotRecord, report: &CheckReport) -> Result<String>;

    /// Render the snapshot listing of `dir`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format_list(&self, dir: &std::path::Path, summaries: &[SnapshotSummary]) -> Result<String>;

    /// Render one stored snapshot.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format_record(&self, record: &SnapshotRecord) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against stdout.
    #[must_use]
    pub fn use_colors_on_stdout(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }

    /// Resolve against stderr.
    #[must_use]
    pub fn use_colors_on_stderr(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// Presence of `NO_COLOR` (any value) disables color, per <https://no-color.org>.
fn no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Build the formatter for a format.
#[must_use]
pub fn formatter_for(format: OutputFormat, color: ColorMode) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
