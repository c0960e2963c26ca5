//! Structural comparison of JSON values.
//!
//! Classification policy:
//! - type change, removed key, removed array element: breaking
//! - added key, added array element, scalar value change: non-breaking

mod engine;

use serde::Serialize;
use serde_json::Value;

pub use engine::{IgnoredFields, ROOT_MARKER, diff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Changed,
}

impl DiffKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
        }
    }
}

/// A single classified difference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffItem {
    /// Locator from the root, e.g. `body.users[0].name`.
    pub path: String,
    pub kind: DiffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
    pub breaking: bool,
}

impl DiffItem {
    #[must_use]
    pub const fn added(path: String, value: Value) -> Self {
        Self {
            path,
            kind: DiffKind::Added,
            old_value: None,
            new_value: Some(value),
            breaking: false,
        }
    }

    #[must_use]
    pub const fn removed(path: String, value: Value) -> Self {
        Self {
            path,
            kind: DiffKind::Removed,
            old_value: Some(value),
            new_value: None,
            breaking: true,
        }
    }

    #[must_use]
    pub const fn changed(path: String, old: Value, new: Value, breaking: bool) -> Self {
        Self {
            path,
            kind: DiffKind::Changed,
            old_value: Some(old),
            new_value: Some(new),
            breaking,
        }
    }
}
