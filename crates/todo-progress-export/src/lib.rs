pub mod exporter;
pub mod console;
pub mod csv_file;
pub mod json_file;
pub mod atomic;
pub mod error;

// Re-exports
pub use exporter::{ExportReport, Exporter};
pub use console::ConsoleExporter;
pub use csv_file::CsvExporter;
pub use json_file::JsonExporter;
pub use atomic::write_atomically;
pub use error::{ExportError, Result};
