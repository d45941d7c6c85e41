//! Search node: resolve the query and call the catalog.
use anyhow::Result;

use super::SharingAgent;
use crate::catalog::CatalogBackend;
use crate::metadata::MetadataBackend;
use crate::state::{StageUpdate, WorkflowState};

impl<C: CatalogBackend, M: MetadataBackend> SharingAgent<C, M> {
    /// Resolve the query (explicit field, else the most recent message) and
    /// store the catalog's matches. An upstream failure becomes an empty
    /// result set with the `degraded` flag raised; the pipeline continues.
    pub(crate) fn run_search(&self, state: &WorkflowState) -> Result<StageUpdate> {
        let query = state
            .query
            .as_deref()
            .filter(|query| !query.trim().is_empty())
            .or_else(|| state.last_message_text())
            .unwrap_or_default()
            .to_string();

        tracing::info!(query = %query, "searching listings");
        let (listings, degraded) =
            match self
                .catalog
                .search_listings(&query, &self.project_id, &self.location)
            {
                Ok(listings) => (listings, false),
                Err(err) => {
                    tracing::warn!(error = %format!("{err:#}"), "catalog search failed");
                    (Vec::new(), true)
                }
            };

        Ok(StageUpdate {
            query: Some(query),
            listings: Some(listings),
            degraded: Some(degraded),
            ..StageUpdate::default()
        })
    }
}
