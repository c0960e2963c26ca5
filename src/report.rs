//! Check report: status, header and body differences between a stored
//! snapshot and a fresh response.

use serde::Serialize;
use serde_json::Value;

use crate::diff::{DiffItem, IgnoredFields, diff};
use crate::snapshot::SnapshotRecord;

/// Overall outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Identical,
    NonBreaking,
    Breaking,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::NonBreaking => "non_breaking",
            Self::Breaking => "breaking",
        }
    }
}

/// Knobs for assembling a report.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Applied to both the header and the body comparison.
    pub ignored_fields: IgnoredFields,
    pub ignore_headers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub diffs: Vec<DiffItem>,
    pub breaking_count: usize,
    pub total_count: usize,
}

impl CheckReport {
    /// Compare a stored snapshot against a freshly fetched response.
    ///
    /// Differences are ordered status, headers, body.
    #[must_use]
    pub fn build(saved: &SnapshotRecord, current: &SnapshotRecord, options: &CheckOptions) -> Self {
        let mut diffs = Vec::new();

        if saved.status != current.status {
            diffs.push(DiffItem::changed(
                "status".to_string(),
                Value::from(saved.status),
                Value::from(current.status),
                true,
            ));
        }

        if !options.ignore_headers {
            diffs.extend(diff(
                &saved.headers_value(),
                &current.headers_value(),
                "headers",
                &options.ignored_fields,
            ));
        }

        diffs.extend(diff(
            &saved.body,
            &current.body,
            "body",
            &options.ignored_fields,
        ));

        Self::from_diffs(diffs)
    }

    #[must_use]
    pub fn from_diffs(diffs: Vec<DiffItem>) -> Self {
        let breaking_count = diffs.iter().filter(|d| d.breaking).count();
        let total_count = diffs.len();
        Self {
            diffs,
            breaking_count,
            total_count,
        }
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.breaking_count > 0 {
            Verdict::Breaking
        } else if self.total_count > 0 {
            Verdict::NonBreaking
        } else {
            Verdict::Identical
        }
    }

    #[must_use]
    pub const fn has_breaking(&self) -> bool {
        self.breaking_count > 0
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
