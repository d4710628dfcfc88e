//! Option and result-page model
//!
//! A `SearchOption` is one selectable record from the remote collection.
//! The record itself is kept as raw JSON so callers can project whatever
//! fields they need after selection; the component only relies on the
//! stable id and the display label.

use serde_json::Value;

/// One selectable record returned by a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOption {
    /// Stable identifier, stringified (backends return both numbers and strings)
    pub id: String,
    /// Display label projected from the record's fields
    pub label: String,
    /// The raw record, preserved for the caller
    pub record: Value,
}

impl SearchOption {
    /// Create an option with an empty record (test and cache helper)
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            record: Value::Null,
        }
    }
}

/// One fetched page of search results
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub items: Vec<SearchOption>,
    /// Whether the backend appears to have further pages for this query.
    /// Heuristic when no total is reported: a full page implies more.
    pub has_more: bool,
    /// Total match count, when the backend reported one
    pub total_count: Option<u64>,
}

impl ResultPage {
    /// An empty page with no further results
    pub fn empty() -> Self {
        Self::default()
    }
}
