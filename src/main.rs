use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod commands;
mod config;
mod metadata;
mod output;
mod state;
mod summarize;
mod util;
mod workflow;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::RootArgs::parse();
    match args.command {
        cli::Command::Init(args) => commands::run_init(&args),
        cli::Command::Search(args) => commands::run_search(&args),
        cli::Command::Subscribe(args) => commands::run_subscribe(&args),
    }
}
