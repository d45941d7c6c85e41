//! Enrichment node: attach quality and contract metadata to top results.
use anyhow::Result;

use super::{SharingAgent, ENRICH_LIMIT};
use crate::catalog::CatalogBackend;
use crate::metadata::MetadataBackend;
use crate::state::{StageUpdate, WorkflowState};

impl<C: CatalogBackend, M: MetadataBackend> SharingAgent<C, M> {
    /// Enrich the first [`ENRICH_LIMIT`] listings with metadata, keyed by
    /// each listing's resource name. Input order is preserved. A failed
    /// lookup leaves that listing unscored (ranked as 0) instead of
    /// aborting the stage.
    pub(crate) fn run_enrich(&self, state: &WorkflowState) -> Result<StageUpdate> {
        let listings = state.listings.clone().unwrap_or_default();
        let mut enriched = Vec::with_capacity(listings.len().min(ENRICH_LIMIT));

        for mut listing in listings.into_iter().take(ENRICH_LIMIT) {
            listing.data_quality_score = match self.metadata.quality_score(&listing.name) {
                Ok(score) => Some(score),
                Err(err) => {
                    tracing::warn!(
                        listing = %listing.name,
                        error = %format!("{err:#}"),
                        "quality score lookup failed"
                    );
                    None
                }
            };
            listing.data_contract = match self.metadata.contract_info(&listing.name) {
                Ok(contract) => Some(contract),
                Err(err) => {
                    tracing::warn!(
                        listing = %listing.name,
                        error = %format!("{err:#}"),
                        "data contract lookup failed"
                    );
                    None
                }
            };
            enriched.push(listing);
        }

        Ok(StageUpdate {
            listings: Some(enriched),
            ..StageUpdate::default()
        })
    }
}
