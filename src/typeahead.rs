pub mod debouncer;
pub mod state;

// Re-export public types
pub use debouncer::Debouncer;
pub use state::{TypeaheadConfig, TypeaheadState};
