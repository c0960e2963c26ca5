use serde_json::json;

use super::*;
use crate::diff::DiffKind;
use crate::snapshot::Headers;

fn record(status: u16, headers: &[(&str, &str)], body: Value) -> SnapshotRecord {
    SnapshotRecord {
        url: "https://api.example.com/items".to_string(),
        method: "GET".to_string(),
        status,
        headers: headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<Headers>(),
        body,
        timestamp: "2026-01-01T00:00:00.000Z".to_string(),
    }
}

fn options(ignored: &[&str], ignore_headers: bool) -> CheckOptions {
    CheckOptions {
        ignored_fields: ignored.iter().map(|s| (*s).to_string()).collect(),
        ignore_headers,
    }
}

#[test]
fn identical_records_are_identical() {
    let saved = record(200, &[("content-type", "application/json")], json!({"a": 1}));
    let report = CheckReport::build(&saved, &saved.clone(), &CheckOptions::default());
    assert!(report.diffs.is_empty());
    assert_eq!(report.total_count, 0);
    assert_eq!(report.breaking_count, 0);
    assert_eq!(report.verdict(), Verdict::Identical);
}

#[test]
fn body_key_changes_are_breaking() {
    let saved = record(200, &[], json!({"a": 1, "b": 2}));
    let current = record(200, &[], json!({"a": 1, "c": 3}));
    let report = CheckReport::build(&saved, &current, &CheckOptions::default());

    assert_eq!(report.total_count, 2);
    assert_eq!(report.breaking_count, 1);
    assert_eq!(report.diffs[0].path, "body.b");
    assert_eq!(report.diffs[0].kind, DiffKind::Removed);
    assert_eq!(report.diffs[1].path, "body.c");
    assert_eq!(report.diffs[1].kind, DiffKind::Added);
    assert_eq!(report.verdict(), Verdict::Breaking);
}

#[test]
fn status_change_is_breaking_regardless_of_body() {
    let saved = record(200, &[], json!({"a": 1}));
    let current = record(500, &[], json!({"a": 1}));
    let report = CheckReport::build(&saved, &current, &CheckOptions::default());

    assert_eq!(report.total_count, 1);
    let item = &report.diffs[0];
    assert_eq!(item.path, "status");
    assert_eq!(item.kind, DiffKind::Changed);
    assert_eq!(item.old_value, Some(json!(200)));
    assert_eq!(item.new_value, Some(json!(500)));
    assert!(item.breaking);
    assert_eq!(report.verdict(), Verdict::Breaking);
}

#[test]
fn array_shrink_in_body_is_breaking() {
    let saved = record(200, &[], json!([1, 2, 3]));
    let current = record(200, &[], json!([1, 2]));
    let report = CheckReport::build(&saved, &current, &CheckOptions::default());
    assert_eq!(report.total_count, 1);
    assert_eq!(report.diffs[0].path, "body[2]");
    assert!(report.has_breaking());
}

#[test]
fn scalar_change_is_non_breaking_verdict() {
    let saved = record(200, &[], json!({"count": 1}));
    let current = record(200, &[], json!({"count": 2}));
    let report = CheckReport::build(&saved, &current, &CheckOptions::default());
    assert_eq!(report.verdict(), Verdict::NonBreaking);
    assert!(!report.has_breaking());
}

#[test]
fn header_changes_are_reported_with_headers_prefix() {
    let saved = record(200, &[("etag", "1"), ("x-old", "y")], json!(null));
    let current = record(200, &[("etag", "2")], json!(null));
    let report = CheckReport::build(&saved, &current, &CheckOptions::default());

    let paths: Vec<_> = report.diffs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["headers.etag", "headers.x-old"]);
    assert_eq!(report.breaking_count, 1);
}

#[test]
fn ignore_headers_skips_header_comparison() {
    let saved = record(200, &[("x-old", "y")], json!({}));
    let current = record(200, &[], json!({}));
    let report = CheckReport::build(&saved, &current, &options(&[], true));
    assert_eq!(report.verdict(), Verdict::Identical);
}

#[test]
fn ignored_fields_apply_to_headers_and_body() {
    let saved = record(200, &[("date", "mon")], json!({"date": "mon", "id": 1}));
    let current = record(200, &[("date", "tue")], json!({"date": "tue", "id": 1}));
    let report = CheckReport::build(&saved, &current, &options(&["date"], false));
    assert!(report.diffs.is_empty());
}

#[test]
fn diffs_are_ordered_status_headers_body() {
    let saved = record(200, &[("a", "1")], json!({"k": 1}));
    let current = record(201, &[("a", "2")], json!({"k": 2}));
    let report = CheckReport::build(&saved, &current, &CheckOptions::default());
    let paths: Vec<_> = report.diffs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["status", "headers.a", "body.k"]);
}

#[test]
fn non_json_bodies_compare_as_strings() {
    let saved = record(200, &[], json!("<p>old</p>"));
    let current = record(200, &[], json!("<p>new</p>"));
    let report = CheckReport::build(&saved, &current, &CheckOptions::default());
    assert_eq!(report.total_count, 1);
    assert_eq!(report.diffs[0].path, "body");
    assert!(!report.diffs[0].breaking);
}

#[test]
fn verdict_strings() {
    assert_eq!(Verdict::Identical.as_str(), "identical");
    assert_eq!(Verdict::NonBreaking.as_str(), "non_breaking");
    assert_eq!(Verdict::Breaking.as_str(), "breaking");
}
