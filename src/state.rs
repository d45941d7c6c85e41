//! Workflow state carried through the listing pipeline.
//!
//! Every pipeline node receives the accumulated state and returns a
//! `StageUpdate`; the merge policy lives in `WorkflowState::apply` so each
//! node's contract (append vs replace) stays explicit and auditable.
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Who authored a conversation entry.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One conversation entry. Order-preserving, append-only across a run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Data-contract metadata attached to a listing during enrichment.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DataContract {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub sla: String,
}

/// One catalog entry. Listings are value objects recreated by each stage;
/// `name` is the only identity that survives across stages.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Listing {
    /// Fully-qualified resource name; enrichment and subscription key.
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Last path segment of `name`.
    pub listing_id: String,
    #[serde(default)]
    pub data_exchange: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub exchange_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_quality_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_contract: Option<DataContract>,
}

impl Listing {
    /// Score used for ranking; a listing that was never scored ranks as 0.
    pub fn quality_or_zero(&self) -> f64 {
        self.data_quality_score.unwrap_or(0.0)
    }
}

/// The mutable record threaded through every workflow node.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkflowState {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listings: Option<Vec<Listing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_listing_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_result: Option<String>,
    /// Set when the upstream search call failed, so the response node can
    /// distinguish "no matches" from "search unavailable".
    #[serde(default)]
    pub degraded: bool,
}

/// Partial state returned by a pipeline node.
///
/// `messages` is appended; every other field replaces the state field
/// wholesale when present. Nodes never merge listings.
#[derive(Debug, Default)]
pub struct StageUpdate {
    pub messages: Vec<Message>,
    pub query: Option<String>,
    pub listings: Option<Vec<Listing>>,
    pub subscription_result: Option<String>,
    pub degraded: Option<bool>,
}

impl WorkflowState {
    /// Initial state for a free-text search request.
    pub fn search_request(text: &str) -> Self {
        WorkflowState {
            messages: vec![Message::user(text)],
            query: Some(text.to_string()),
            ..WorkflowState::default()
        }
    }

    /// Initial state for a subscribe interaction carrying a listing name.
    pub fn subscribe_request(listing_name: &str) -> Self {
        WorkflowState {
            messages: vec![Message::user(format!("subscribe {listing_name}"))],
            selected_listing_id: Some(listing_name.to_string()),
            ..WorkflowState::default()
        }
    }

    /// True when the caller selected a listing, which routes the run to the
    /// subscribe branch.
    pub fn has_selection(&self) -> bool {
        self.selected_listing_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }

    /// Text of the most recent message, used as the query fallback.
    pub fn last_message_text(&self) -> Option<&str> {
        self.messages.last().map(|message| message.content.as_str())
    }

    /// Reject states the controller could not route anywhere useful.
    pub fn validate_initial(&self) -> Result<()> {
        if self.has_selection() {
            return Ok(());
        }
        let has_query = self
            .query
            .as_deref()
            .is_some_and(|query| !query.trim().is_empty());
        if has_query || !self.messages.is_empty() {
            return Ok(());
        }
        Err(anyhow!(
            "initial state needs at least one message, a query, or a selected listing"
        ))
    }

    /// Merge a node's partial result into the accumulated state.
    pub fn apply(&mut self, update: StageUpdate) {
        self.messages.extend(update.messages);
        if let Some(query) = update.query {
            self.query = Some(query);
        }
        if let Some(listings) = update.listings {
            self.listings = Some(listings);
        }
        if let Some(result) = update.subscription_result {
            self.subscription_result = Some(result);
        }
        if let Some(degraded) = update.degraded {
            self.degraded = degraded;
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
