use crate::Result;
use async_trait::async_trait;
use todo_progress_core::{EmployeeId, Owner, ProgressRecord, Task};

/// Read-only access to an employee's task list and profile.
#[async_trait]
pub trait TodoSource: Send + Sync {
    /// Fetch the task list for an employee
    async fn fetch_tasks(&self, id: EmployeeId) -> Result<Vec<Task>>;

    /// Fetch the profile of an employee
    async fn fetch_owner(&self, id: EmployeeId) -> Result<Owner>;
}

/// Retrieve tasks, then the owner, and assemble a progress record.
///
/// The owner is only looked up once the task list has been retrieved. Either
/// failure aborts the whole fetch; nothing partial is returned.
pub async fn fetch_progress(source: &dyn TodoSource, id: EmployeeId) -> Result<ProgressRecord> {
    tracing::info!("Fetching TODO progress for employee {}", id);

    let tasks = source.fetch_tasks(id).await?;
    let owner = source.fetch_owner(id).await?;

    Ok(ProgressRecord::new(owner, tasks))
}
