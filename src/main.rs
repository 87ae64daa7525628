mod adapters;
mod cli;
mod commands;
mod deps;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, LOG_FILTER_ENV};
use crate::deps::ShellDeps;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let deps = ShellDeps::assemble()?;

    match cli.command {
        Command::Archive { url, title, silent } => {
            commands::archive::run(&deps, url, title, silent).await
        }
        Command::Precheck { url, service } => commands::precheck::run(&deps, url, service).await,
        Command::History { command } => commands::history::run(&deps, command).await,
        Command::Config { command } => commands::config::run(&deps, command).await,
    }
}
