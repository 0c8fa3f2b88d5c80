use crate::{write_atomically, ExportReport, Exporter, Result};
use std::path::PathBuf;
use todo_progress_core::{EmployeeId, ProgressRecord};

pub const CSV_HEADER: [&str; 4] = ["USER_ID", "USERNAME", "TASK_COMPLETED_STATUS", "TASK_TITLE"];

/// Writes every task as a row of `<id>.csv`.
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for(&self, id: EmployeeId) -> PathBuf {
        self.output_dir.join(format!("{}.csv", id))
    }
}

fn write_rows(
    out: &mut dyn std::io::Write,
    id: EmployeeId,
    record: &ProgressRecord,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;

    let user_id = id.to_string();
    let username = record.owner().username.as_str();
    for task in record.tasks() {
        writer.write_record([
            user_id.as_str(),
            username,
            task.status_label(),
            task.title.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(record.total_count())
}

impl Exporter for CsvExporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn export(&self, id: EmployeeId, record: &ProgressRecord) -> Result<ExportReport> {
        let path = self.path_for(id);
        let mut rows = 0;

        write_atomically(&path, |out| {
            rows = write_rows(out, id, record)?;
            Ok(())
        })?;

        tracing::info!("Exported {} tasks to {}", rows, path.display());

        Ok(ExportReport {
            destination: Some(path),
            rows,
        })
    }
}
