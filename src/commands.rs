//! Command handlers wiring config, clients, and the workflow together.
use anyhow::{anyhow, Result};
use std::path::Path;
use std::time::Duration;

use crate::catalog::HttpCatalog;
use crate::cli::{InitArgs, OutputFormat, SearchArgs, SubscribeArgs};
use crate::config::{self, AgentConfig};
use crate::metadata::HttpMetadata;
use crate::output;
use crate::state::WorkflowState;
use crate::summarize::CommandSummarizer;
use crate::workflow::SharingAgent;

pub fn run_init(args: &InitArgs) -> Result<()> {
    let path = config::resolve_config_path(args.config.as_deref())?;
    if path.is_file() && !args.force {
        return Err(anyhow!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    let mut config = config::default_config();
    if let Some(project) = &args.project {
        config.project_id = project.clone();
    }
    config::write_config(&path, &config)?;
    println!("wrote config stub to {}", path.display());
    Ok(())
}

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let config = effective_config(
        args.config.as_deref(),
        args.project.as_deref(),
        args.location.as_deref(),
    )?;
    let agent = build_agent(&config)?;
    let query = args.query.join(" ");

    let state = agent.invoke(WorkflowState::search_request(&query))?;

    match args.output {
        OutputFormat::Text => output::render_search_text(&state, &config.project_id),
        OutputFormat::Json => output::render_state_json(&state)?,
    }
    Ok(())
}

pub fn run_subscribe(args: &SubscribeArgs) -> Result<()> {
    let config = effective_config(
        args.config.as_deref(),
        args.project.as_deref(),
        args.location.as_deref(),
    )?;
    let agent = build_agent(&config)?;

    let state = agent.invoke(WorkflowState::subscribe_request(&args.listing))?;

    match args.output {
        OutputFormat::Text => output::render_subscription_text(&state),
        OutputFormat::Json => output::render_state_json(&state)?,
    }
    Ok(())
}

fn effective_config(
    config_path: Option<&Path>,
    project: Option<&str>,
    location: Option<&str>,
) -> Result<AgentConfig> {
    let path = config::resolve_config_path(config_path)?;
    let mut config = config::load_config(&path)?;
    config::apply_env_overrides(&mut config);
    if let Some(project) = project {
        config.project_id = project.to_string();
    }
    if let Some(location) = location {
        config.location = location.to_string();
    }
    config::validate_config(&config)?;
    Ok(config)
}

fn build_agent(config: &AgentConfig) -> Result<SharingAgent<HttpCatalog, HttpMetadata>> {
    let timeout = Duration::from_millis(config.request_timeout_ms);
    let mut agent = SharingAgent::new(
        &config.project_id,
        &config.location,
        HttpCatalog::new(&config.catalog_endpoint, timeout),
        HttpMetadata::new(&config.metadata_endpoint, timeout),
    );
    if let Some(command) = &config.lm_command {
        agent = agent.with_summarizer(Box::new(CommandSummarizer::from_command(command)?));
    }
    Ok(agent)
}
