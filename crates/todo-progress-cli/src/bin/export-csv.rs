use std::process::ExitCode;
use todo_progress_cli::{ExportCsvCli, Format};

#[tokio::main]
async fn main() -> ExitCode {
    todo_progress_cli::init();

    let cli: ExportCsvCli = todo_progress_cli::parse_or_exit();

    todo_progress_cli::main_for(Format::Csv, cli.args).await
}
