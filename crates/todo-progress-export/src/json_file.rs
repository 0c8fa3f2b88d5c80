use crate::{write_atomically, ExportReport, Exporter, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::path::PathBuf;
use todo_progress_core::{EmployeeId, ProgressRecord};

/// Writes `{"<id>": [{task, completed, username}, ...]}` to `<id>.json`.
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
struct TaskEntry<'a> {
    task: &'a str,
    completed: bool,
    username: &'a str,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for(&self, id: EmployeeId) -> PathBuf {
        self.output_dir.join(format!("{}.json", id))
    }
}

fn build_document(id: EmployeeId, record: &ProgressRecord) -> BTreeMap<String, Vec<TaskEntry<'_>>> {
    let username = record.owner().username.as_str();
    let entries = record
        .tasks()
        .iter()
        .map(|task| TaskEntry {
            task: &task.title,
            completed: task.completed,
            username,
        })
        .collect();

    let mut document = BTreeMap::new();
    document.insert(id.to_string(), entries);
    document
}

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, id: EmployeeId, record: &ProgressRecord) -> Result<ExportReport> {
        let path = self.path_for(id);
        let document = build_document(id, record);

        write_atomically(&path, |out| {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(out, formatter);
            document.serialize(&mut serializer)?;
            Ok(())
        })?;

        let rows = record.total_count();
        tracing::info!("Exported {} tasks to {}", rows, path.display());

        Ok(ExportReport {
            destination: Some(path),
            rows,
        })
    }
}
