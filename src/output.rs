//! Terminal rendering for final workflow states.
//!
//! This plays the chat adapter's role: the first few listings are shown as
//! "interactive" entries whose subscribe payload is the listing's resource
//! name, and subscription outcomes are plain text.
use anyhow::{Context, Result};

use crate::catalog::listing_console_url;
use crate::state::WorkflowState;

/// How many listings the adapter renders as interactive entries.
pub(crate) const RENDER_LIMIT: usize = 5;

pub(crate) fn render_search_text(state: &WorkflowState, project_id: &str) {
    let listings = state.listings.as_deref().unwrap_or_default();
    if listings.is_empty() {
        // The response node already chose the right notice.
        if let Some(message) = state.messages.last() {
            println!("{}", message.content);
        }
        return;
    }

    let query = state.query.as_deref().unwrap_or_default();
    println!(
        "Found {} listing(s) for {query:?} (showing up to {RENDER_LIMIT}):",
        listings.len()
    );
    for (index, listing) in listings.iter().take(RENDER_LIMIT).enumerate() {
        println!();
        match listing.data_quality_score {
            Some(score) => println!(
                "{}. {} [quality {score:.2}]",
                index + 1,
                listing.display_name
            ),
            None => println!("{}. {}", index + 1, listing.display_name),
        }
        if !listing.description.is_empty() {
            println!("   {}", listing.description);
        }
        if !listing.data_exchange.is_empty() {
            println!("   exchange: {}", listing.data_exchange);
        }
        if let Some(contract) = &listing.data_contract {
            println!(
                "   contract: {} (owner {}, SLA {})",
                contract.status, contract.owner, contract.sla
            );
        }
        println!("   subscribe payload: {}", listing.name);
        println!("   url: {}", listing_console_url(&listing.name, project_id));
    }
}

pub(crate) fn render_subscription_text(state: &WorkflowState) {
    if let Some(result) = state.subscription_result.as_deref() {
        println!("{result}");
    }
}

pub(crate) fn render_state_json(state: &WorkflowState) -> Result<()> {
    let text = serde_json::to_string_pretty(state).context("serialize final state")?;
    println!("{text}");
    Ok(())
}
