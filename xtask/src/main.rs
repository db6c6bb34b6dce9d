//! Maintenance tasks for the advert service.
//!
//! Run through the `cargo xtask` alias in `.cargo/config.toml`, e.g.
//! `cargo xtask dynamodb deploy`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod dynamodb;
mod output;

use output::Reporter;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Maintenance tasks for the advert service")]
struct Xtask {
    /// Only print errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Provision, inspect or remove the advert table
    #[command(subcommand)]
    Dynamodb(dynamodb::TableTask),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Xtask::parse();
    let out = Reporter::new(args.quiet);

    let outcome = match args.task {
        Task::Dynamodb(task) => dynamodb::run(task, &out).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
