use crate::{Owner, Task};

/// Owner plus task list for a single employee, handed from retrieval to export.
///
/// The full task sequence is kept in source order; the completed subset is
/// derived on demand so its relative order always matches the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    owner: Owner,
    tasks: Vec<Task>,
}

impl ProgressRecord {
    pub fn new(owner: Owner, tasks: Vec<Task>) -> Self {
        let record = Self { owner, tasks };

        tracing::debug!(
            "Assembled progress for {}: {}/{} tasks completed",
            record.owner.username,
            record.completed_count(),
            record.total_count()
        );

        record
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|t| t.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_tasks().count()
    }
}
