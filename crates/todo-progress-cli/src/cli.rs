use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use todo_progress_client::DEFAULT_BASE_URL;
use todo_progress_core::EmployeeId;

/// Arguments shared by every entry point.
#[derive(Args, Debug, Clone)]
pub struct EmployeeArgs {
    /// Employee ID (positive integer)
    #[arg(value_name = "EMPLOYEE_ID")]
    pub employee_id: EmployeeId,

    /// Base URL of the TODO API
    #[arg(long, env = "TODO_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory exported files are written to
    #[arg(long, env = "TODO_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "todo-progress")]
#[command(about = "Report an employee's TODO list progress", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print completed tasks to the terminal
    Summary(EmployeeArgs),

    /// Export all tasks to <EMPLOYEE_ID>.csv
    Csv(EmployeeArgs),

    /// Export all tasks to <EMPLOYEE_ID>.json
    Json(EmployeeArgs),
}

#[derive(Parser, Debug)]
#[command(name = "gather-progress")]
#[command(about = "Print an employee's completed TODO tasks", long_about = None)]
#[command(version)]
pub struct GatherCli {
    #[command(flatten)]
    pub args: EmployeeArgs,
}

#[derive(Parser, Debug)]
#[command(name = "export-csv")]
#[command(about = "Export an employee's TODO list to <EMPLOYEE_ID>.csv", long_about = None)]
#[command(version)]
pub struct ExportCsvCli {
    #[command(flatten)]
    pub args: EmployeeArgs,
}

#[derive(Parser, Debug)]
#[command(name = "export-json")]
#[command(about = "Export an employee's TODO list to <EMPLOYEE_ID>.json", long_about = None)]
#[command(version)]
pub struct ExportJsonCli {
    #[command(flatten)]
    pub args: EmployeeArgs,
}
