pub mod source;
pub mod api;
pub mod error;

// Re-exports
pub use source::{fetch_progress, TodoSource};
pub use api::{TodoApiClient, DEFAULT_BASE_URL};
pub use error::{FetchError, Resource, Result};
