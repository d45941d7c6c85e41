//! Subscribe node: create a subscription into a derived destination dataset.
use anyhow::{anyhow, Result};

use super::SharingAgent;
use crate::catalog::CatalogBackend;
use crate::metadata::MetadataBackend;
use crate::state::{StageUpdate, WorkflowState};
use crate::util::last_segment;

/// Prefix for the destination dataset derived from the listing id.
const DESTINATION_PREFIX: &str = "subscription_";

impl<C: CatalogBackend, M: MetadataBackend> SharingAgent<C, M> {
    /// Subscribe to the selected listing. The destination dataset name is
    /// derived deterministically from the listing id. A failed subscribe
    /// call becomes a failure string in `subscription_result`; the run
    /// still reaches its terminal state.
    ///
    /// Routing guarantees a selection is present; the guard here exists so
    /// a routing bug fails loudly instead of subscribing to nothing.
    pub(crate) fn run_subscribe(&self, state: &WorkflowState) -> Result<StageUpdate> {
        let listing_name = state
            .selected_listing_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| anyhow!("subscribe node reached without a selected listing"))?;

        let destination = format!("{DESTINATION_PREFIX}{}", last_segment(listing_name));
        tracing::info!(listing = listing_name, destination = %destination, "subscribing");

        let result = match self.catalog.subscribe_listing(
            listing_name,
            &destination,
            &self.project_id,
            &self.location,
        ) {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(
                    listing = listing_name,
                    error = %format!("{err:#}"),
                    "subscribe call failed"
                );
                format!("Failed to subscribe: {err:#}")
            }
        };

        Ok(StageUpdate {
            subscription_result: Some(result),
            ..StageUpdate::default()
        })
    }
}
