//! depgate CLI

mod cli;

use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();
    cli::init_logging(args.verbose);

    match cli::run_check(&args).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            cli::report_crash(&e);
            ExitCode::from(2)
        }
    }
}
