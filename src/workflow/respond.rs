//! Responding nodes: turn the branch outcome into one assistant message.
use anyhow::{Context, Result};

use super::{SharingAgent, NO_RESULTS_NOTICE, SEARCH_UNAVAILABLE_NOTICE};
use crate::catalog::CatalogBackend;
use crate::metadata::MetadataBackend;
use crate::state::{Message, StageUpdate, WorkflowState};

impl<C: CatalogBackend, M: MetadataBackend> SharingAgent<C, M> {
    /// Append the search branch's single assistant message.
    ///
    /// Empty results get a fixed notice without any external call. Otherwise
    /// the message is the configured summarizer's output, falling back to the
    /// serialized listing sequence so the adapter always has a
    /// machine-parseable payload.
    pub(crate) fn run_respond_search(&self, state: &WorkflowState) -> Result<StageUpdate> {
        let listings = state.listings.as_deref().unwrap_or_default();
        if listings.is_empty() {
            let notice = if state.degraded {
                SEARCH_UNAVAILABLE_NOTICE
            } else {
                NO_RESULTS_NOTICE
            };
            return Ok(reply(notice.to_string()));
        }

        if let Some(summarizer) = &self.summarizer {
            let query = state.query.as_deref().unwrap_or_default();
            match summarizer.summarize(query, listings) {
                Ok(summary) => return Ok(reply(summary)),
                Err(err) => {
                    tracing::warn!(
                        error = %format!("{err:#}"),
                        "summarizer failed; falling back to serialized listings"
                    );
                }
            }
        }

        let payload =
            serde_json::to_string(listings).context("serialize listings for response")?;
        Ok(reply(payload))
    }

    /// Append the subscribe branch's assistant message echoing the outcome.
    pub(crate) fn run_respond_subscribe(&self, state: &WorkflowState) -> Result<StageUpdate> {
        let result = state.subscription_result.clone().unwrap_or_default();
        Ok(reply(result))
    }
}

fn reply(content: String) -> StageUpdate {
    StageUpdate {
        messages: vec![Message::assistant(content)],
        ..StageUpdate::default()
    }
}
