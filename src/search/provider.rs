//! Search provider abstraction
//!
//! The typeahead depends only on this seam: a function from query + page to
//! one page of results. The REST adapter in `crate::http` is the production
//! implementation; tests inject stubs.

use thiserror::Error;

use super::option::ResultPage;

/// Errors that can occur while fetching a page of results
///
/// All variants are absorbed by the typeahead (degraded to an empty result
/// set); callers wanting user-visible error reporting wrap their provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend returned a non-2xx response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A paginated remote search capability
///
/// `page` is 1-based, matching the backend contract. Implementations are
/// called from the worker thread and may block.
pub trait SearchProvider: Send + 'static {
    fn fetch(&self, query: &str, page: u32) -> Result<ResultPage, SearchError>;
}

impl<F> SearchProvider for F
where
    F: Fn(&str, u32) -> Result<ResultPage, SearchError> + Send + 'static,
{
    fn fetch(&self, query: &str, page: u32) -> Result<ResultPage, SearchError> {
        self(query, page)
    }
}
