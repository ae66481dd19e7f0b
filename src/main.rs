//! Entry point: parse CLI and dispatch to the report command.

use clap::Parser;
use footy::{cli::Cli, commands::run, logging::setup_logging};
use std::process::ExitCode;

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let app = Cli::parse();
    setup_logging(app.debug);

    let stdout = std::io::stdout();
    match run(app, &mut stdout.lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
