//! Interactive typeahead picker for paginated REST collections
//!
//! Type a query in a terminal UI, see debounced search results from a
//! remote collection endpoint, page through them, and pick one record.
//! The crate splits into a headless typeahead state machine
//! ([`typeahead`]), a worker-thread search pipeline ([`search`], [`http`])
//! and the TUI shell around them ([`app`]).

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod layout;
pub mod search;
pub mod typeahead;
pub mod widgets;

#[cfg(test)]
mod test_utils;
