use std::fmt::Write;
use std::path::Path;

use serde_json::Value;

use crate::diff::{DiffItem, DiffKind};
use crate::error::Result;
use crate::report::{CheckReport, Verdict};
use crate::snapshot::{SnapshotRecord, SnapshotSummary};

use super::{ColorMode, OutputFormatter, ansi};

/// Values longer than this are shortened in diff lines.
const MAX_VALUE_WIDTH: usize = 80;

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stdout(),
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_item(&self, item: &DiffItem, out: &mut String) {
        let line = match item.kind {
            DiffKind::Added => format!("+ {}: {}", item.path, render(item.new_value.as_ref())),
            DiffKind::Removed => format!("- {}: {}", item.path, render(item.old_value.as_ref())),
            DiffKind::Changed => format!(
                "~ {}: {} -> {}",
                item.path,
                render(item.old_value.as_ref()),
                render(item.new_value.as_ref())
            ),
        };

        if item.breaking {
            let tag = self.paint(ansi::BOLD, "[BREAKING]");
            let _ = writeln!(out, "  {} {tag}", self.paint(ansi::RED, &line));
        } else {
            let color = match item.kind {
                DiffKind::Added => ansi::GREEN,
                DiffKind::Removed | DiffKind::Changed => ansi::YELLOW,
            };
            let _ = writeln!(out, "  {}", self.paint(color, &line));
        }
    }

    fn verdict_label(&self, verdict: Verdict) -> String {
        match verdict {
            Verdict::Identical => self.paint(ansi::GREEN, "✓ identical"),
            Verdict::NonBreaking => self.paint(ansi::YELLOW, "⚠ changed (non-breaking)"),
            Verdict::Breaking => self.paint(ansi::RED, "✗ breaking changes"),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, saved: &SnapshotRecord, report: &CheckReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} (snapshot from {})",
            saved.method,
            saved.url,
            self.paint(ansi::DIM, &saved.timestamp)
        );

        if report.diffs.is_empty() {
            let _ = writeln!(out, "  No differences");
        }
        for item in &report.diffs {
            self.format_item(item, &mut out);
        }

        let _ = writeln!(
            out,
            "\nResult: {} ({} difference(s), {} breaking)",
            self.verdict_label(report.verdict()),
            report.total_count,
            report.breaking_count
        );
        Ok(out)
    }

    fn format_list(&self, dir: &Path, summaries: &[SnapshotSummary]) -> Result<String> {
        let mut out = String::new();
        if summaries.is_empty() {
            let _ = writeln!(out, "No snapshots found in {}", dir.display());
            return Ok(out);
        }

        for summary in summaries {
            let _ = writeln!(
                out,
                "{:<7} {}  {}  {}",
                summary.method,
                self.paint(status_color(summary.status), &summary.status.to_string()),
                summary.url,
                self.paint(ansi::DIM, &summary.timestamp)
            );
        }
        let _ = writeln!(
            out,
            "\n{} snapshot(s) in {}",
            summaries.len(),
            dir.display()
        );
        Ok(out)
    }

    fn format_record(&self, record: &SnapshotRecord) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} -> {} (saved {})",
            record.method,
            record.url,
            self.paint(status_color(record.status), &record.status.to_string()),
            record.timestamp
        );
        let _ = writeln!(out, "{}", self.paint(ansi::CYAN, "Headers:"));
        for (name, value) in &record.headers {
            let _ = writeln!(out, "  {name}: {value}");
        }
        let _ = writeln!(out, "{}", self.paint(ansi::CYAN, "Body:"));
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(&record.body)?);
        Ok(out)
    }
}

const fn status_color(status: u16) -> &'static str {
    match status {
        200..=299 => ansi::GREEN,
        300..=399 => ansi::CYAN,
        400..=499 => ansi::YELLOW,
        _ => ansi::RED,
    }
}

fn render(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "(none)".to_string();
    };
    let text = value.to_string();
    if text.chars().count() <= MAX_VALUE_WIDTH {
        return text;
    }
    let mut short: String = text.chars().take(MAX_VALUE_WIDTH - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
