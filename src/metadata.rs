//! Metadata service client for listing quality and contract lookups.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use ureq::Agent;

use crate::state::DataContract;

/// Narrow contract the enrichment node holds on the metadata service.
pub trait MetadataBackend {
    /// Data quality score in `[0, 1]` for a catalog entry.
    fn quality_score(&self, entry_id: &str) -> Result<f64>;

    /// Contract status, owner, and SLA for a catalog entry.
    fn contract_info(&self, entry_id: &str) -> Result<DataContract>;
}

/// HTTP implementation of [`MetadataBackend`].
pub struct HttpMetadata {
    agent: Agent,
    endpoint: String,
}

impl HttpMetadata {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        HttpMetadata {
            agent,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct QualityResponse {
    score: f64,
}

impl MetadataBackend for HttpMetadata {
    fn quality_score(&self, entry_id: &str) -> Result<f64> {
        let url = format!("{}/{entry_id}:dataQualityScore", self.endpoint);
        let response: QualityResponse = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("fetch quality score for {entry_id}"))?
            .body_mut()
            .read_json()
            .context("parse quality score response")?;
        Ok(response.score.clamp(0.0, 1.0))
    }

    fn contract_info(&self, entry_id: &str) -> Result<DataContract> {
        let url = format!("{}/{entry_id}:dataContract", self.endpoint);
        let contract: DataContract = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("fetch data contract for {entry_id}"))?
            .body_mut()
            .read_json()
            .context("parse data contract response")?;
        Ok(contract)
    }
}
