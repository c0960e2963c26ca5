use std::path::Path;

use serde::Serialize;

use crate::diff::DiffItem;
use crate::error::Result;
use crate::report::{CheckReport, Verdict};
use crate::snapshot::{SnapshotRecord, SnapshotSummary};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    url: &'a str,
    method: &'a str,
    snapshot_timestamp: &'a str,
    verdict: Verdict,
    summary: Summary,
    diffs: &'a [DiffItem],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    breaking: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, saved: &SnapshotRecord, report: &CheckReport) -> Result<String> {
        let output = JsonReport {
            url: &saved.url,
            method: &saved.method,
            snapshot_timestamp: &saved.timestamp,
            verdict: report.verdict(),
            summary: Summary {
                total: report.total_count,
                breaking: report.breaking_count,
            },
            diffs: &report.diffs,
        };
        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    }

    fn format_list(&self, _dir: &Path, summaries: &[SnapshotSummary]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(summaries)?))
    }

    fn format_record(&self, record: &SnapshotRecord) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(record)?))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
