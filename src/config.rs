//! Agent configuration: project context, service endpoints, and the
//! optional summarizer command.
//!
//! Resolution order is file, then `HUBSCOUT_*` environment overrides, then
//! explicit CLI flags; validation runs on the final result.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Current schema version for `config.json`.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Location used when the config omits one.
pub const DEFAULT_LOCATION: &str = "us-central1";

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentConfig {
    pub schema_version: u32,
    pub project_id: String,
    #[serde(default = "default_location")]
    pub location: String,
    pub catalog_endpoint: String,
    pub metadata_endpoint: String,
    /// Per-request timeout applied to every catalog and metadata call.
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
    /// External summarizer command; absent means responses carry serialized
    /// listings instead of prose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lm_command: Option<String>,
}

/// Build the config written by `hubscout init`. The project id is left for
/// the user (or `--project`) to fill in.
pub fn default_config() -> AgentConfig {
    AgentConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        project_id: String::new(),
        location: default_location(),
        catalog_endpoint: "http://localhost:8080/v1".to_string(),
        metadata_endpoint: "http://localhost:8081/v1".to_string(),
        request_timeout_ms: default_timeout_ms(),
        lm_command: None,
    }
}

/// Default config location under the user config directory.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    Ok(base.join("hubscout").join("config.json"))
}

/// Explicit path when given, default location otherwise.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

pub fn load_config(path: &Path) -> Result<AgentConfig> {
    let bytes = fs::read(path).with_context(|| {
        format!(
            "read config {} (run `hubscout init` to create one)",
            path.display()
        )
    })?;
    let config: AgentConfig = serde_json::from_slice(&bytes).context("parse config JSON")?;
    Ok(config)
}

/// Persist a config in stable pretty JSON.
pub fn write_config(path: &Path, config: &AgentConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Overlay `HUBSCOUT_*` environment variables onto a loaded config.
pub fn apply_env_overrides(config: &mut AgentConfig) {
    if let Ok(value) = env::var("HUBSCOUT_PROJECT_ID") {
        config.project_id = value;
    }
    if let Ok(value) = env::var("HUBSCOUT_LOCATION") {
        config.location = value;
    }
    if let Ok(value) = env::var("HUBSCOUT_CATALOG_ENDPOINT") {
        config.catalog_endpoint = value;
    }
    if let Ok(value) = env::var("HUBSCOUT_METADATA_ENDPOINT") {
        config.metadata_endpoint = value;
    }
    if let Ok(value) = env::var("HUBSCOUT_LM_COMMAND") {
        config.lm_command = Some(value);
    }
}

pub fn validate_config(config: &AgentConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {}",
            config.schema_version
        ));
    }
    if config.project_id.trim().is_empty() {
        return Err(anyhow!(
            "project_id must be set (config file, HUBSCOUT_PROJECT_ID, or --project)"
        ));
    }
    if config.location.trim().is_empty() {
        return Err(anyhow!("location must be non-empty"));
    }
    validate_endpoint(&config.catalog_endpoint, "catalog_endpoint")?;
    validate_endpoint(&config.metadata_endpoint, "metadata_endpoint")?;
    if config.request_timeout_ms == 0 {
        return Err(anyhow!("request_timeout_ms must be greater than zero"));
    }
    Ok(())
}

fn validate_endpoint(endpoint: &str, label: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return Ok(());
    }
    Err(anyhow!("{label} must be an http(s) URL (got {endpoint:?})"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
