use crate::{EmployeeArgs, EXIT_FETCH, EXIT_WRITE};
use std::path::Path;
use thiserror::Error;
use todo_progress_client::{fetch_progress, FetchError, TodoApiClient, TodoSource};
use todo_progress_core::EmployeeId;
use todo_progress_export::{
    ConsoleExporter, CsvExporter, ExportError, ExportReport, Exporter, JsonExporter,
};

/// Output variant selected by the invoked binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Summary,
    Csv,
    Json,
}

impl Format {
    pub fn exporter(self, output_dir: &Path) -> Box<dyn Exporter> {
        match self {
            Format::Summary => Box::new(ConsoleExporter::stdout()),
            Format::Csv => Box::new(CsvExporter::new(output_dir)),
            Format::Json => Box::new(JsonExporter::new(output_dir)),
        }
    }
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Fetch(_) => EXIT_FETCH,
            RunError::Export(_) => EXIT_WRITE,
        }
    }

    /// One-line summary printed ahead of the detailed cause.
    pub fn headline(&self) -> Option<String> {
        match self {
            RunError::Fetch(e) => e.resource().map(|r| format!("Failed to retrieve {}.", r)),
            RunError::Export(_) => None,
        }
    }
}

/// Fetch from the configured API and export in the requested format.
pub async fn run(format: Format, args: &EmployeeArgs) -> Result<ExportReport, RunError> {
    let client = TodoApiClient::new(args.base_url.as_str())?;
    let exporter = format.exporter(&args.output_dir);

    let report = run_with(&client, exporter.as_ref(), args.employee_id).await?;

    if let Some(path) = &report.destination {
        let shown = path.strip_prefix(".").unwrap_or(path.as_path());
        println!("Data has been exported to {}", shown.display());
    }

    Ok(report)
}

/// Fetch the record, then hand it to a single exporter.
///
/// Nothing is exported unless both lookups succeed.
pub async fn run_with(
    source: &dyn TodoSource,
    exporter: &dyn Exporter,
    id: EmployeeId,
) -> Result<ExportReport, RunError> {
    let record = fetch_progress(source, id).await?;

    tracing::debug!("Exporting employee {} as {}", id, exporter.name());
    let report = exporter.export(id, &record)?;

    Ok(report)
}
