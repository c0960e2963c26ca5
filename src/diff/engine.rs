use std::collections::BTreeSet;

use serde_json::{Map, Number, Value};

use super::DiffItem;

/// Object keys excluded from comparison at any depth.
pub type IgnoredFields = BTreeSet<String>;

/// Path shown for differences found at the top level with an empty prefix.
pub const ROOT_MARKER: &str = "(root)";

/// Compare two JSON values and return every difference in a stable order.
///
/// `prefix` is prepended to every emitted path (`prefix.key`, `prefix[i]`).
/// Object keys are visited in lexicographic order. `ignored` only applies to
/// object keys, never to array indices or to the root value itself.
///
/// Recursion depth follows the depth of the inputs.
#[must_use]
pub fn diff(old: &Value, new: &Value, prefix: &str, ignored: &IgnoredFields) -> Vec<DiffItem> {
    let mut out = Vec::new();
    walk(old, new, prefix, ignored, &mut out);
    out
}

fn walk(old: &Value, new: &Value, path: &str, ignored: &IgnoredFields, out: &mut Vec<DiffItem>) {
    match (old, new) {
        // Null is compared by value, never treated as a type change.
        (Value::Null, _) | (_, Value::Null) => compare_scalars(old, new, path, out),
        (Value::Array(a), Value::Array(b)) => diff_arrays(a, b, path, ignored, out),
        (Value::Object(a), Value::Object(b)) => diff_objects(a, b, path, ignored, out),
        _ if type_name(old) != type_name(new) => out.push(DiffItem::changed(
            display_path(path),
            Value::String(type_name(old).to_string()),
            Value::String(type_name(new).to_string()),
            true,
        )),
        _ => compare_scalars(old, new, path, out),
    }
}

fn compare_scalars(old: &Value, new: &Value, path: &str, out: &mut Vec<DiffItem>) {
    if !same_scalar(old, new) {
        out.push(DiffItem::changed(
            display_path(path),
            old.clone(),
            new.clone(),
            false,
        ));
    }
}

/// Numbers compare by value, so `1.0` and `1` are equal.
fn same_scalar(old: &Value, new: &Value) -> bool {
    match (old, new) {
        (Value::Number(a), Value::Number(b)) => same_number(a, b),
        _ => old == new,
    }
}

#[allow(clippy::float_cmp)]
fn same_number(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if !a.is_f64() && !b.is_f64() {
        // A negative integer against one above i64::MAX.
        return false;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn diff_arrays(
    old: &[Value],
    new: &[Value],
    path: &str,
    ignored: &IgnoredFields,
    out: &mut Vec<DiffItem>,
) {
    for i in 0..old.len().max(new.len()) {
        let item_path = format!("{path}[{i}]");
        match (old.get(i), new.get(i)) {
            (Some(a), Some(b)) => walk(a, b, &item_path, ignored, out),
            (None, Some(b)) => out.push(DiffItem::added(item_path, b.clone())),
            (Some(a), None) => out.push(DiffItem::removed(item_path, a.clone())),
            (None, None) => unreachable!("index below max length"),
        }
    }
}

fn diff_objects(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    path: &str,
    ignored: &IgnoredFields,
    out: &mut Vec<DiffItem>,
) {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    for key in keys {
        if ignored.contains(key) {
            continue;
        }
        let key_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        match (old.get(key), new.get(key)) {
            (Some(a), Some(b)) => walk(a, b, &key_path, ignored, out),
            (None, Some(b)) => out.push(DiffItem::added(key_path, b.clone())),
            (Some(a), None) => out.push(DiffItem::removed(key_path, a.clone())),
            (None, None) => unreachable!("key comes from one of the maps"),
        }
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        ROOT_MARKER.to_string()
    } else {
        path.to_string()
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
