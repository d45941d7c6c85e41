use super::rank_by_quality;
use crate::state::Listing;

fn listing(name: &str, score: Option<f64>) -> Listing {
    Listing {
        name: name.to_string(),
        display_name: name.to_string(),
        description: String::new(),
        listing_id: name.to_string(),
        data_exchange: String::new(),
        project_id: String::new(),
        location: String::new(),
        exchange_id: String::new(),
        data_quality_score: score,
        data_contract: None,
    }
}

fn names(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.name.as_str()).collect()
}

#[test]
fn ranks_descending_by_score() {
    let ranked = rank_by_quality(vec![
        listing("low", Some(0.2)),
        listing("high", Some(0.9)),
        listing("mid", Some(0.5)),
    ]);
    assert_eq!(names(&ranked), ["high", "mid", "low"]);
}

#[test]
fn missing_scores_rank_as_zero() {
    let ranked = rank_by_quality(vec![
        listing("unscored", None),
        listing("scored", Some(0.1)),
    ]);
    assert_eq!(names(&ranked), ["scored", "unscored"]);
}

#[test]
fn equal_scores_keep_input_order() {
    let ranked = rank_by_quality(vec![
        listing("first", Some(0.5)),
        listing("second", Some(0.5)),
        listing("third", Some(0.5)),
    ]);
    assert_eq!(names(&ranked), ["first", "second", "third"]);
}

#[test]
fn empty_input_is_a_no_op() {
    assert!(rank_by_quality(Vec::new()).is_empty());
}
