pub mod client;
pub mod normalize;

// Re-export public types
pub use client::RestClient;
pub use normalize::{DEFAULT_LABEL_FIELDS, normalize_page, total_from_headers};
