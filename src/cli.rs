//! CLI argument parsing for the catalog agent.
//!
//! The CLI is intentionally thin: it stands in for the chat platform
//! adapter, so each command maps one-to-one onto a workflow invocation.
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "hubscout",
    version,
    about = "Chat-driven search and subscription for a data-exchange catalog",
    after_help = "Examples:\n  hubscout init --project my-project\n  hubscout search sales data\n  hubscout subscribe --listing projects/p/locations/us/dataExchanges/e/listings/listing1",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Search(SearchArgs),
    Subscribe(SubscribeArgs),
}

/// Output rendering for search and subscribe results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing summary
    Text,
    /// Final workflow state as pretty JSON
    Json,
}

/// Init command inputs for writing a config stub.
#[derive(Parser, Debug)]
#[command(about = "Write a config stub to edit before first use")]
pub struct InitArgs {
    /// Config path (default: user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project id to record in the stub
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

/// Search command inputs.
#[derive(Parser, Debug)]
#[command(about = "Search catalog listings and render ranked results")]
pub struct SearchArgs {
    /// Free-text query; multiple words are joined with spaces
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Config path (default: user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured project id
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// Override the configured location
    #[arg(long, value_name = "LOC")]
    pub location: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Subscribe command inputs carrying the listing's opaque resource name.
#[derive(Parser, Debug)]
#[command(about = "Subscribe to a listing by its full resource name")]
pub struct SubscribeArgs {
    /// Listing resource name, as rendered by `hubscout search`
    #[arg(long, value_name = "NAME")]
    pub listing: String,

    /// Config path (default: user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured project id
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// Override the configured location
    #[arg(long, value_name = "LOC")]
    pub location: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}
