//! Response normalization
//!
//! Backends for these collection endpoints are inconsistent: bodies are
//! either a bare JSON array or `{"items": [...]}`, the total count may come
//! in any of several headers or not at all, and the display field varies by
//! entity. Everything is flattened here into `ResultPage` so the typeahead
//! never sees the mess.

use serde_json::Value;

use crate::search::{ResultPage, SearchOption};

/// Header names probed for a total match count, in preference order
pub const TOTAL_COUNT_HEADERS: &[&str] = &["x-total-count", "x-items-count"];

/// Default fields probed for a display label, in preference order
pub const DEFAULT_LABEL_FIELDS: &[&str] = &["nome", "razao_social", "fantasia", "name", "descricao"];

/// Pick the total count out of response headers
///
/// `header` is a lookup into the response (name is lowercase); the first
/// header that parses as a number wins, non-numeric values are skipped.
pub fn total_from_headers<'a>(header: impl Fn(&str) -> Option<&'a str>) -> Option<u64> {
    TOTAL_COUNT_HEADERS
        .iter()
        .find_map(|name| header(name).and_then(|value| value.trim().parse().ok()))
}

/// Normalize one response body into a `ResultPage`
///
/// Records without a stable `id` are skipped. `has_more` carries only the
/// page-local signal, a full page: `len == per_page`. That reads as a false
/// positive when the true total is an exact multiple of the page size,
/// which matches what the backends' own clients do. The caller combines it
/// with `total_count` against its cumulative fetched count.
pub fn normalize_page(
    body: Value,
    total_count: Option<u64>,
    per_page: usize,
    label_fields: &[String],
) -> ResultPage {
    let raw_items = match body {
        Value::Array(list) => list,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(list)) => list,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    // The heuristic counts what the backend sent, not what survived
    // projection
    let fetched = raw_items.len();

    let items = raw_items
        .into_iter()
        .filter_map(|record| project_option(record, label_fields))
        .collect();

    ResultPage {
        items,
        has_more: fetched == per_page,
        total_count,
    }
}

/// Project one record into a `SearchOption`
///
/// The id is stringified (backends send both numbers and strings); the
/// label is the first present non-empty field from `label_fields`, falling
/// back to the id.
fn project_option(record: Value, label_fields: &[String]) -> Option<SearchOption> {
    let (id, label) = {
        let obj = record.as_object()?;
        let id = scalar_string(obj.get("id")?)?;
        let label = label_fields
            .iter()
            .find_map(|field| obj.get(field).and_then(scalar_string))
            .unwrap_or_else(|| id.clone());
        (id, label)
    };

    Some(SearchOption { id, label, record })
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
