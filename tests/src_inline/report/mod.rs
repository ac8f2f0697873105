use super::*;
use crate::input::Batch;
use crate::model::records::PlayerScoreInput;
use crate::pipeline::score_batch;

#[test]
fn test_quantiles() {
    let v = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(p10(&v), 2.0);
    assert_eq!(mean(&v), 3.0);
    assert_eq!(median(&[]), 0.0);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn test_summary_counts_flags() {
    let profile = ScoringProfile::default_v1();
    let batch = Batch::Players(vec![
        PlayerScoreInput::new("#A", "a", 10),
        PlayerScoreInput::new("#B", "b", 11),
    ]);
    let scored = score_batch(batch, &profile).unwrap();
    let summary = build_summary(&scored, &profile);
    assert_eq!(summary.n_players, 2);
    assert_eq!(summary.profile, "default_v1");
    assert_eq!(summary.top_tag.as_deref(), Some("#A"));
    let no_war = summary
        .flags
        .iter()
        .find(|f| f.flag == "NO_WAR_HISTORY")
        .unwrap();
    assert_eq!(no_war.count, 2);
    assert_eq!(no_war.fraction, 1.0);
    assert!(summary.activity_levels.is_empty());
    assert_eq!(summary.ace.min, summary.ace.max);
}
