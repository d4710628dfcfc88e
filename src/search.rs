pub mod option;
pub mod provider;
pub mod worker;

// Re-export public types
pub use option::{ResultPage, SearchOption};
pub use provider::{SearchError, SearchProvider};
pub use worker::{SearchRequest, SearchResponse, spawn_worker};
