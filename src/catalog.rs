//! Catalog service client: listing search, subscription, and console URLs.
//!
//! The catalog has no server-side search endpoint; search walks every data
//! exchange under the project/location and filters listings client-side.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ureq::Agent;

use crate::state::Listing;
use crate::util::last_segment;

/// Console landing page used when a listing name cannot be parsed.
const CONSOLE_BASE: &str = "https://console.datahub.example.com/exchange";

/// Narrow contract the workflow holds on the catalog service.
pub trait CatalogBackend {
    /// Return listings whose display name or description contains `query`,
    /// case-insensitively. Order follows catalog traversal order.
    fn search_listings(
        &self,
        query: &str,
        project_id: &str,
        location: &str,
    ) -> Result<Vec<Listing>>;

    /// Subscribe to a listing, materializing it into `destination_dataset`.
    /// Returns a human-readable outcome string.
    fn subscribe_listing(
        &self,
        listing_name: &str,
        destination_dataset: &str,
        project_id: &str,
        location: &str,
    ) -> Result<String>;
}

/// HTTP implementation of [`CatalogBackend`].
pub struct HttpCatalog {
    agent: Agent,
    endpoint: String,
}

impl HttpCatalog {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        HttpCatalog {
            agent,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExchangePage {
    #[serde(default)]
    data_exchanges: Vec<ExchangeRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeRecord {
    name: String,
    #[serde(default)]
    display_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingPage {
    #[serde(default)]
    listings: Vec<ListingRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingRecord {
    name: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    description: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeRequest<'a> {
    destination_dataset: DestinationDataset<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DestinationDataset<'a> {
    dataset_reference: DatasetReference<'a>,
    location: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatasetReference<'a> {
    dataset_id: &'a str,
    project_id: &'a str,
}

impl CatalogBackend for HttpCatalog {
    fn search_listings(
        &self,
        query: &str,
        project_id: &str,
        location: &str,
    ) -> Result<Vec<Listing>> {
        let parent = format!("projects/{project_id}/locations/{location}");
        let url = format!("{}/{}/dataExchanges", self.endpoint, parent);
        let exchanges: ExchangePage = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("list data exchanges under {parent}"))?
            .body_mut()
            .read_json()
            .context("parse data exchange list")?;

        let mut results = Vec::new();
        for exchange in &exchanges.data_exchanges {
            let url = format!("{}/{}/listings", self.endpoint, exchange.name);
            let page: ListingPage = self
                .agent
                .get(&url)
                .call()
                .with_context(|| format!("list listings in {}", exchange.name))?
                .body_mut()
                .read_json()
                .context("parse listing list")?;

            for record in page.listings {
                if !matches_query(query, &record.display_name, &record.description) {
                    continue;
                }
                results.push(Listing {
                    listing_id: last_segment(&record.name).to_string(),
                    name: record.name,
                    display_name: record.display_name,
                    description: record.description,
                    data_exchange: exchange.display_name.clone(),
                    project_id: project_id.to_string(),
                    location: location.to_string(),
                    exchange_id: last_segment(&exchange.name).to_string(),
                    data_quality_score: None,
                    data_contract: None,
                });
            }
        }
        tracing::debug!(
            query,
            exchanges = exchanges.data_exchanges.len(),
            matches = results.len(),
            "catalog search complete"
        );
        Ok(results)
    }

    fn subscribe_listing(
        &self,
        listing_name: &str,
        destination_dataset: &str,
        project_id: &str,
        location: &str,
    ) -> Result<String> {
        let url = format!("{}/{listing_name}:subscribe", self.endpoint);
        let request = SubscribeRequest {
            destination_dataset: DestinationDataset {
                dataset_reference: DatasetReference {
                    dataset_id: destination_dataset,
                    project_id,
                },
                location,
            },
        };
        self.agent
            .post(&url)
            .send_json(&request)
            .with_context(|| format!("subscribe to {listing_name}"))?;
        tracing::info!(listing = listing_name, destination_dataset, "subscribed");
        Ok(format!(
            "Successfully subscribed! Data is available in dataset: {destination_dataset}"
        ))
    }
}

/// Case-insensitive substring match on display name or description.
pub(crate) fn matches_query(query: &str, display_name: &str, description: &str) -> bool {
    let needle = query.to_lowercase();
    display_name.to_lowercase().contains(&needle)
        || description.to_lowercase().contains(&needle)
}

/// Console URL for a listing, for rendering alongside search results.
///
/// Expects `projects/{p}/locations/{l}/dataExchanges/{e}/listings/{id}`;
/// anything else falls back to the console landing page.
pub fn listing_console_url(listing_name: &str, project_id: &str) -> String {
    let parts: Vec<&str> = listing_name.split('/').collect();
    match (parts.get(3), parts.get(5), parts.get(7)) {
        (Some(location), Some(exchange_id), Some(listing_id)) => format!(
            "{CONSOLE_BASE}/locations/{location}/exchanges/{exchange_id}/listings/{listing_id}?project={project_id}"
        ),
        _ => CONSOLE_BASE.to_string(),
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
