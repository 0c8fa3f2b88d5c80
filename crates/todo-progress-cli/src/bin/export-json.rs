use std::process::ExitCode;
use todo_progress_cli::{ExportJsonCli, Format};

#[tokio::main]
async fn main() -> ExitCode {
    todo_progress_cli::init();

    let cli: ExportJsonCli = todo_progress_cli::parse_or_exit();

    todo_progress_cli::main_for(Format::Json, cli.args).await
}
