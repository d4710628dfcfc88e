pub mod loader;
pub mod types;

// Re-export public types
pub use loader::{config_path, load, load_from};
pub use types::{Config, HttpSection, SearchSection};
