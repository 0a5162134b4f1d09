//! social-graph: command-line front end for social-graph-core.
//!
//! With no subcommand it replays the walkthrough on the built-in sample.
//! Query subcommands load a dataset (JSON) into a fresh store and print one
//! result as text or JSON. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod load;
mod render;
mod settings;
mod walkthrough;

use settings::{Cli, Command};

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.global.log_level);

    let config = cli.global.store_config();
    let command = cli.command.unwrap_or(Command::Walkthrough);

    if command == Command::Walkthrough {
        return walkthrough::run(&mut std::io::stdout().lock(), config);
    }

    let dataset = load::read_dataset(cli.global.dataset.as_deref())?;
    let (store, report) = load::build_store(&dataset, config)?;
    let output = commands::execute(&store, &command, report)?;
    render::emit(&output, cli.global.format)
}
