//! Colored error and warning output on stderr.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::io::Write;

use super::{ColorMode, ansi};
use crate::error::ApiSnapError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stderr(),
        }
    }

    /// Print a crate error using its type, message, detail and suggestion.
    pub fn print(&self, err: &ApiSnapError) {
        let mut stderr = std::io::stderr().lock();
        self.write_api_error(&mut stderr, err);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    pub fn write_api_error<W: Write>(&self, w: &mut W, err: &ApiSnapError) {
        self.write_error(
            w,
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion(),
        );
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let heading = self.styled(&[ansi::BOLD, ansi::RED], &format!("✖ {error_type}:"));
        let _ = writeln!(w, "{heading} {message}");
        if let Some(d) = detail {
            let _ = writeln!(w, "  {}", self.styled(&[ansi::DIM], &format!("× {d}")));
        }
        if let Some(s) = suggestion {
            let _ = writeln!(w, "  {} {s}", self.styled(&[ansi::CYAN], "help:"));
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        let heading = self.styled(&[ansi::BOLD, ansi::YELLOW], "⚠ Warning:");
        let _ = writeln!(w, "{heading} {message}");
    }

    fn styled(&self, codes: &[&str], text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", codes.concat(), ansi::RESET)
        } else {
            text.to_string()
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// Print an error to stderr with the given color mode.
pub fn print_error(err: &ApiSnapError, mode: ColorMode) {
    ErrorOutput::new(mode).print(err);
}

/// Print a warning to stderr with the given color mode.
pub fn print_warning(message: &str, mode: ColorMode) {
    ErrorOutput::new(mode).print_warning(message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
