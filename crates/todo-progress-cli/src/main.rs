use std::process::ExitCode;
use todo_progress_cli::{Cli, Commands, Format};

#[tokio::main]
async fn main() -> ExitCode {
    todo_progress_cli::init();

    let cli: Cli = todo_progress_cli::parse_or_exit();

    let (format, args) = match cli.command {
        Commands::Summary(args) => (Format::Summary, args),
        Commands::Csv(args) => (Format::Csv, args),
        Commands::Json(args) => (Format::Json, args),
    };

    todo_progress_cli::main_for(format, args).await
}
