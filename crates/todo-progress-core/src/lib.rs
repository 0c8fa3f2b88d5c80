pub mod employee;
pub mod task;
pub mod progress;
pub mod error;

// Re-exports
pub use employee::{EmployeeId, Owner};
pub use task::Task;
pub use progress::ProgressRecord;
pub use error::{Error, Result};
