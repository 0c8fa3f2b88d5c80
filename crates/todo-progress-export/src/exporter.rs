use crate::Result;
use std::path::PathBuf;
use todo_progress_core::{EmployeeId, ProgressRecord};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// File written, `None` for stream output
    pub destination: Option<PathBuf>,
    /// Number of task entries rendered
    pub rows: usize,
}

/// Renders a progress record to one destination format.
pub trait Exporter {
    /// Short format name used in logs
    fn name(&self) -> &'static str;

    fn export(&self, id: EmployeeId, record: &ProgressRecord) -> Result<ExportReport>;
}
