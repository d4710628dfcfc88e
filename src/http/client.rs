//! REST collection search client
//!
//! Implements `SearchProvider` over a `GET {url}` collection endpoint. The
//! free-text value is duplicated under every search key the observed
//! backends understand, and pagination is 1-based `page`/`per_page`.
//! Cross-cutting HTTP concerns beyond a plain timeout (retries, auth
//! refresh) stay with the caller; extra fixed params and headers can be
//! attached per client.

use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::search::{ResultPage, SearchError, SearchProvider};

use super::normalize::{DEFAULT_LABEL_FIELDS, normalize_page, total_from_headers};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Search keys the backend variants recognize; all carry the same value
const SEARCH_KEYS: &[&str] = &["q", "search", "term", "nome"];

/// Blocking client for one collection endpoint
pub struct RestClient {
    agent: Agent,
    url: String,
    per_page: usize,
    extra_params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    label_fields: Vec<String>,
}

impl RestClient {
    /// Create a client for `url` with default paging and projection
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(DEFAULT_TIMEOUT).build(),
            url: url.into(),
            per_page: 10,
            extra_params: Vec::new(),
            headers: Vec::new(),
            label_fields: DEFAULT_LABEL_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Overall request timeout (connect + read)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = ureq::AgentBuilder::new().timeout(timeout).build();
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Fixed query parameters merged into every search call
    /// (e.g. `somente_ativos=true`)
    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.extra_params = params;
        self
    }

    /// Fixed request headers (e.g. `Authorization`)
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Fields probed, in order, for the display label
    pub fn with_label_fields(mut self, fields: Vec<String>) -> Self {
        if !fields.is_empty() {
            self.label_fields = fields;
        }
        self
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }
}

/// Query parameters for one search call
pub fn search_params(query: &str, page: u32, per_page: usize) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = SEARCH_KEYS
        .iter()
        .map(|key| (key.to_string(), query.to_string()))
        .collect();
    params.push(("page".to_string(), page.to_string()));
    params.push(("per_page".to_string(), per_page.to_string()));
    params
}

impl SearchProvider for RestClient {
    fn fetch(&self, query: &str, page: u32) -> Result<ResultPage, SearchError> {
        let mut request = self.agent.get(&self.url);
        for (key, value) in search_params(query, page, self.per_page) {
            request = request.query(&key, &value);
        }
        for (key, value) in &self.extra_params {
            request = request.query(key, value);
        }
        for (key, value) in &self.headers {
            request = request.set(key, value);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                SearchError::Api { code, message }
            }
            ureq::Error::Transport(t) => SearchError::Network(t.to_string()),
        })?;

        let total = total_from_headers(|name| response.header(name));
        let body: Value = response
            .into_json()
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(normalize_page(body, total, self.per_page, &self.label_fields))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
