use super::*;
use crate::model::scores::ScoreBreakdown;

fn result(tag: &str, ace: f64) -> PlayerScoreResult {
    PlayerScoreResult {
        tag: tag.to_string(),
        name: tag.to_lowercase(),
        ace,
        availability: 50.0,
        breakdown: ScoreBreakdown::default(),
        rank: 0,
        flags: Vec::new(),
        activity: None,
    }
}

#[test]
fn test_sorted_descending_with_one_based_rank() {
    let ranked = run_stage5(vec![result("#A", 40.0), result("#B", 70.0), result("#C", 55.0)]);
    let tags: Vec<&str> = ranked.iter().map(|r| r.tag.as_str()).collect();
    assert_eq!(tags, vec!["#B", "#C", "#A"]);
    let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn test_ties_broken_by_tag() {
    let ranked = run_stage5(vec![result("#ZED", 50.0), result("#ABC", 50.0)]);
    assert_eq!(ranked[0].tag, "#ABC");
    assert_eq!(ranked[1].tag, "#ZED");
    assert_eq!(ranked[0].ace.to_bits(), ranked[1].ace.to_bits());
}

#[test]
fn test_duplicate_tags_keep_input_order() {
    let mut first = result("#DUP", 50.0);
    first.name = "first".to_string();
    let mut second = result("#DUP", 50.0);
    second.name = "second".to_string();
    let ranked = run_stage5(vec![first, second]);
    assert_eq!(ranked[0].name, "first");
    assert_eq!(ranked[1].name, "second");
}

#[test]
fn test_ordering_independent_of_input_order() {
    let a = run_stage5(vec![result("#A", 10.0), result("#B", 10.0), result("#C", 30.0)]);
    let b = run_stage5(vec![result("#C", 30.0), result("#B", 10.0), result("#A", 10.0)]);
    assert_eq!(a, b);
}

#[test]
fn test_empty_batch() {
    assert!(run_stage5(Vec::new()).is_empty());
}
