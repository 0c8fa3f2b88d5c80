pub mod cli;
pub mod commands;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use cli::{Cli, Commands, EmployeeArgs, ExportCsvCli, ExportJsonCli, GatherCli};
pub use commands::{run, run_with, Format, RunError};

/// Exit status for argument and validation errors.
pub const EXIT_USAGE: u8 = 1;
/// Exit status when the TODO list or employee details cannot be retrieved.
pub const EXIT_FETCH: u8 = 2;
/// Exit status when the output cannot be written.
pub const EXIT_WRITE: u8 = 3;

/// Load `.env` and install the log subscriber.
///
/// Logs go to stderr so that stdout only carries the report itself.
pub fn init() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parse arguments, exiting with [`EXIT_USAGE`] on invalid input.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported on stdout and are not failures
            let code = if e.use_stderr() { EXIT_USAGE as i32 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Run one export and turn its outcome into a process exit status.
pub async fn main_for(format: Format, args: EmployeeArgs) -> ExitCode {
    match run(format, &args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            for line in diagnostics(e) {
                eprintln!("{}", line);
            }
            ExitCode::from(code)
        }
    }
}

/// Lines reported for a failed run: headline, error, then its root cause once.
pub fn diagnostics(e: RunError) -> Vec<String> {
    let mut lines: Vec<String> = e.headline().into_iter().collect();
    lines.push(format!("Error: {}", e));

    let err = anyhow::Error::new(e);
    if err.chain().count() > 1 {
        lines.push(format!("Caused by: {}", err.root_cause()));
    }

    lines
}
