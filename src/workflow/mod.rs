//! Workflow controller for the listing search and subscribe pipelines.
//!
//! The graph is a fixed finite-state machine: a routing node picks one of
//! two linear branches from the initial state, each node returns a partial
//! `StageUpdate`, and the run ends at a terminal responding node.
mod enrich;
mod rank;
mod respond;
mod search;
mod subscribe;

use anyhow::Result;

use crate::catalog::CatalogBackend;
use crate::metadata::MetadataBackend;
use crate::state::{StageUpdate, WorkflowState};
use crate::summarize::Summarizer;

/// Fan-out cap for metadata lookups: only the first 3 search results are
/// enriched, and the remainder is dropped rather than carried unenriched.
pub const ENRICH_LIMIT: usize = 3;

/// Assistant notice when search ran cleanly but matched nothing.
pub const NO_RESULTS_NOTICE: &str =
    "I couldn't find any data listings matching your request.";

/// Assistant notice when the catalog search call itself failed.
pub const SEARCH_UNAVAILABLE_NOTICE: &str =
    "Listing search is unavailable right now. Please try again later.";

/// Workflow graph nodes. Responding nodes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    RoutingDecision,
    Searching,
    Enriching,
    Ranking,
    RespondingSearch,
    Subscribing,
    RespondingSubscribe,
}

impl Node {
    /// Next node, or `None` at a terminal node.
    ///
    /// Only the routing node consults the state, and it is entered exactly
    /// once per run; both branches are otherwise strictly linear.
    fn successor(self, state: &WorkflowState) -> Option<Node> {
        match self {
            Node::RoutingDecision => Some(if state.has_selection() {
                Node::Subscribing
            } else {
                Node::Searching
            }),
            Node::Searching => Some(Node::Enriching),
            Node::Enriching => Some(Node::Ranking),
            Node::Ranking => Some(Node::RespondingSearch),
            Node::Subscribing => Some(Node::RespondingSubscribe),
            Node::RespondingSearch | Node::RespondingSubscribe => None,
        }
    }
}

/// Catalog sharing agent: owns the collaborators and drives the graph.
pub struct SharingAgent<C, M> {
    pub(crate) project_id: String,
    pub(crate) location: String,
    pub(crate) catalog: C,
    pub(crate) metadata: M,
    pub(crate) summarizer: Option<Box<dyn Summarizer>>,
}

impl<C: CatalogBackend, M: MetadataBackend> SharingAgent<C, M> {
    pub fn new(project_id: &str, location: &str, catalog: C, metadata: M) -> Self {
        SharingAgent {
            project_id: project_id.to_string(),
            location: location.to_string(),
            catalog,
            metadata,
            summarizer: None,
        }
    }

    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Drive the workflow from an initial state to a terminal state.
    ///
    /// Exactly one of `listings` and `subscription_result` is populated in
    /// the returned state, depending on the branch taken. Collaborator
    /// failures are absorbed into the state; the only errors surfaced here
    /// are an unroutable initial state and the defensive missing-selection
    /// guard in the subscribe node.
    pub fn invoke(&self, mut state: WorkflowState) -> Result<WorkflowState> {
        state.validate_initial()?;
        let mut node = Node::RoutingDecision;
        loop {
            tracing::debug!(node = ?node, "workflow node start");
            let update = self.run_node(node, &state)?;
            state.apply(update);
            match node.successor(&state) {
                Some(next) => node = next,
                None => break,
            }
        }
        Ok(state)
    }

    fn run_node(&self, node: Node, state: &WorkflowState) -> Result<StageUpdate> {
        match node {
            // Pass-through; the branch choice lives in the successor map.
            Node::RoutingDecision => Ok(StageUpdate::default()),
            Node::Searching => self.run_search(state),
            Node::Enriching => self.run_enrich(state),
            Node::Ranking => self.run_rank(state),
            Node::RespondingSearch => self.run_respond_search(state),
            Node::Subscribing => self.run_subscribe(state),
            Node::RespondingSubscribe => self.run_respond_subscribe(state),
        }
    }
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
