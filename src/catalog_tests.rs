use super::{listing_console_url, matches_query};

#[test]
fn matches_query_is_case_insensitive() {
    assert!(matches_query("SALES", "Global Sales Data", ""));
    assert!(matches_query("click", "Marketing", "Click events for 2024"));
    assert!(!matches_query("weather", "Global Sales Data", "Click events"));
}

#[test]
fn matches_query_with_empty_query_matches_everything() {
    assert!(matches_query("", "anything", ""));
}

#[test]
fn console_url_embeds_resource_segments() {
    let url = listing_console_url(
        "projects/p/locations/us/dataExchanges/ex1/listings/listing42",
        "my-project",
    );
    assert!(url.contains("/locations/us/"));
    assert!(url.contains("/exchanges/ex1/"));
    assert!(url.contains("/listings/listing42"));
    assert!(url.ends_with("?project=my-project"));
}

#[test]
fn console_url_falls_back_on_malformed_names() {
    let url = listing_console_url("not-a-resource-name", "my-project");
    assert!(!url.contains('?'));
    assert!(url.starts_with("https://"));
}
