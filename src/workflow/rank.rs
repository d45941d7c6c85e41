//! Ranking node: order listings by quality score.
use anyhow::Result;

use super::SharingAgent;
use crate::catalog::CatalogBackend;
use crate::metadata::MetadataBackend;
use crate::state::{Listing, StageUpdate, WorkflowState};

impl<C: CatalogBackend, M: MetadataBackend> SharingAgent<C, M> {
    pub(crate) fn run_rank(&self, state: &WorkflowState) -> Result<StageUpdate> {
        let listings = state.listings.clone().unwrap_or_default();
        Ok(StageUpdate {
            listings: Some(rank_by_quality(listings)),
            ..StageUpdate::default()
        })
    }
}

/// Stable descending sort by quality score; unscored listings rank as 0.
/// Ties keep the enrichment-stage order. Pure reordering, no mutation.
pub(crate) fn rank_by_quality(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.quality_or_zero().total_cmp(&a.quality_or_zero()));
    listings
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
