use crate::{ExportReport, Exporter, Result};
use std::cell::RefCell;
use std::io::{self, Write};
use todo_progress_core::{EmployeeId, ProgressRecord};

/// Prints the completed-task summary to a stream.
pub struct ConsoleExporter<W: Write> {
    out: RefCell<W>,
}

impl ConsoleExporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleExporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

/// Write the summary line followed by one indented line per completed task.
pub fn render_summary(record: &ProgressRecord, out: &mut dyn Write) -> io::Result<usize> {
    writeln!(
        out,
        "Employee {} is done with tasks({}/{}):",
        record.owner().name,
        record.completed_count(),
        record.total_count()
    )?;

    let mut lines = 0;
    for task in record.completed_tasks() {
        writeln!(out, "\t {}", task.title)?;
        lines += 1;
    }

    Ok(lines)
}

impl<W: Write> Exporter for ConsoleExporter<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn export(&self, _id: EmployeeId, record: &ProgressRecord) -> Result<ExportReport> {
        let mut out = self.out.borrow_mut();
        let rows = render_summary(record, &mut *out)?;
        out.flush()?;

        Ok(ExportReport {
            destination: None,
            rows,
        })
    }
}
