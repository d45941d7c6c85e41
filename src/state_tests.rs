use super::{Listing, Message, StageUpdate, WorkflowState};

fn listing(name: &str) -> Listing {
    Listing {
        name: name.to_string(),
        display_name: name.to_string(),
        description: String::new(),
        listing_id: name.rsplit('/').next().unwrap_or(name).to_string(),
        data_exchange: String::new(),
        project_id: String::new(),
        location: String::new(),
        exchange_id: String::new(),
        data_quality_score: None,
        data_contract: None,
    }
}

#[test]
fn apply_appends_messages_and_replaces_listings() {
    let mut state = WorkflowState::search_request("sales");
    state.apply(StageUpdate {
        listings: Some(vec![listing("a"), listing("b")]),
        ..StageUpdate::default()
    });
    state.apply(StageUpdate {
        messages: vec![Message::assistant("done")],
        listings: Some(vec![listing("b")]),
        ..StageUpdate::default()
    });

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].content, "done");
    let listings = state.listings.expect("listings set");
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].name, "b");
}

#[test]
fn apply_leaves_untouched_fields_alone() {
    let mut state = WorkflowState::search_request("sales");
    state.apply(StageUpdate::default());
    assert_eq!(state.query.as_deref(), Some("sales"));
    assert!(state.listings.is_none());
    assert!(state.subscription_result.is_none());
    assert!(!state.degraded);
}

#[test]
fn has_selection_ignores_blank_ids() {
    let mut state = WorkflowState::default();
    assert!(!state.has_selection());
    state.selected_listing_id = Some("   ".to_string());
    assert!(!state.has_selection());
    state.selected_listing_id = Some("projects/p/listings/x".to_string());
    assert!(state.has_selection());
}

#[test]
fn validate_initial_rejects_vacuous_state() {
    let state = WorkflowState::default();
    let err = state.validate_initial().expect_err("vacuous state");
    assert!(err.to_string().contains("initial state"));
}

#[test]
fn validate_initial_accepts_message_only_state() {
    let state = WorkflowState {
        messages: vec![Message::user("find sales data")],
        ..WorkflowState::default()
    };
    state.validate_initial().expect("message is enough");
}

#[test]
fn validate_initial_accepts_selection_only_state() {
    let state = WorkflowState {
        selected_listing_id: Some("projects/p/listings/x".to_string()),
        ..WorkflowState::default()
    };
    state.validate_initial().expect("selection is enough");
}

#[test]
fn state_round_trips_through_json() {
    let mut state = WorkflowState::search_request("clicks");
    state.listings = Some(vec![listing("projects/p/listings/l1")]);
    let text = serde_json::to_string(&state).expect("serialize state");
    let back: WorkflowState = serde_json::from_str(&text).expect("parse state");
    assert_eq!(back.query.as_deref(), Some("clicks"));
    assert_eq!(back.listings.expect("listings").len(), 1);
}
