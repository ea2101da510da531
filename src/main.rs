mod api;
mod cli;
mod core;

use clap::Parser;
use std::process::ExitCode;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    match cli::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {err:?}");
            cli::output::print_error(&cli::error::user_message(&err));
            ExitCode::FAILURE
        }
    }
}
