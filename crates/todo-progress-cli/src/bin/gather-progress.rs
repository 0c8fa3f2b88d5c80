use std::process::ExitCode;
use todo_progress_cli::{GatherCli, Format};

#[tokio::main]
async fn main() -> ExitCode {
    todo_progress_cli::init();

    let cli: GatherCli = todo_progress_cli::parse_or_exit();

    todo_progress_cli::main_for(Format::Summary, cli.args).await
}
