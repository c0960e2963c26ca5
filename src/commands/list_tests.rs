use std::fs;

use clap::Parser;
use serde_json::{Value, json};

use super::*;
use crate::EXIT_SUCCESS;
use crate::cli::Commands;
use crate::commands::test_support::temp_context;
use crate::snapshot::SnapshotRecord;

fn list_args(argv: &[&str]) -> ListArgs {
    let mut full = vec!["api-snap", "list"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Commands::List(args) => args,
        _ => unreachable!("parsed a list command"),
    }
}

fn record(url: &str, method: &str, status: u16) -> SnapshotRecord {
    SnapshotRecord {
        url: url.to_string(),
        method: method.to_string(),
        status,
        headers: Default::default(),
        body: json!({}),
        timestamp: "2026-06-01T00:00:00.000Z".to_string(),
    }
}

#[test]
fn empty_store_reports_no_snapshots() {
    let (_dir, ctx) = temp_context();

    let outcome = run_list_impl(&list_args(&[]), &ctx).unwrap();

    assert_eq!(outcome.exit_code, EXIT_SUCCESS);
    assert!(outcome.output.starts_with("No snapshots found in "));
}

#[test]
fn lists_snapshots_sorted_by_url() {
    let (_dir, ctx) = temp_context();
    ctx.store.save(&record("https://b.example.com/", "GET", 200)).unwrap();
    ctx.store.save(&record("https://a.example.com/", "POST", 201)).unwrap();

    let outcome = run_list_impl(&list_args(&[]), &ctx).unwrap();

    let lines: Vec<&str> = outcome.output.lines().collect();
    assert!(lines[0].starts_with("POST    201  https://a.example.com/"));
    assert!(lines[1].starts_with("GET     200  https://b.example.com/"));
    assert!(outcome.output.contains("2 snapshot(s) in "));
}

#[test]
fn unreadable_files_are_skipped() {
    let (_dir, ctx) = temp_context();
    ctx.store.save(&record("https://a.example.com/", "GET", 200)).unwrap();
    fs::write(ctx.store.root().join("junk.json"), "{not json").unwrap();

    let outcome = run_list_impl(&list_args(&[]), &ctx).unwrap();

    assert!(outcome.output.contains("1 snapshot(s)"));
}

#[test]
fn json_format_emits_array() {
    let (_dir, ctx) = temp_context();
    ctx.store.save(&record("https://a.example.com/", "GET", 200)).unwrap();

    let outcome = run_list_impl(&list_args(&["--format", "json"]), &ctx).unwrap();

    let value: Value = serde_json::from_str(&outcome.output).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["url"], "https://a.example.com/");
    assert_eq!(value[0]["status"], 200);
}
