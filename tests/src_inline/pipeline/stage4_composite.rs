use super::*;
use crate::model::records::{AttackRecord, DonationRecord};
use crate::pipeline::stage2_submetrics::run_stage2;
use crate::pipeline::stage3_confidence::run_stage3;

fn score(input: &PlayerScoreInput, profile: &ScoringProfile) -> PlayerScoreResult {
    let sub = run_stage2(input, profile);
    let eff = run_stage3(&sub, profile);
    run_stage4(input, &sub, &eff, profile)
}

#[test]
fn test_empty_player_is_neutral_composite() {
    let profile = ScoringProfile::default_v1();
    let result = score(&PlayerScoreInput::new("#E", "empty", 12), &profile);
    let expected = SCORE_SCALE * (0.90 * profile.neutral + 0.10 * 0.3);
    assert!((result.ace - expected).abs() < 1e-9);
    assert_eq!(result.availability, 50.0);
    assert_eq!(result.rank, 0);
    assert_eq!(
        result.flags,
        vec![
            ScoreFlag::NoWarHistory,
            ScoreFlag::NoParticipationData,
            ScoreFlag::NoCapitalHistory
        ]
    );
}

#[test]
fn test_ace_is_sum_of_contributions() {
    let profile = ScoringProfile::default_v1();
    let mut input = PlayerScoreInput::new("#S", "sum", 15);
    input.attacks.push(AttackRecord {
        attacker_th: 15,
        defender_th: 15,
        prev_stars: 0,
        new_stars: 2,
        wars_ago: 0,
        attack_order: 1,
    });
    input.donations = DonationRecord {
        given: 120,
        received: 90,
    };
    let result = score(&input, &profile);
    let b = &result.breakdown;
    let sum = b.ova.contribution
        + b.def.contribution
        + b.avail.contribution
        + b.cap.contribution
        + b.don.contribution;
    assert_eq!(result.ace.to_bits(), sum.to_bits());
    assert_eq!(b.ova.weight, profile.weights.ova);
    assert_eq!(b.don.weight, profile.weights.don);
    assert_eq!(b.ova.sample_size, 1);
    assert!(b.ova.effective_value < b.ova.normalized_value);
}

#[test]
fn test_flags_for_thin_history() {
    let profile = ScoringProfile::default_v1();
    let mut input = PlayerScoreInput::new("#T", "thin", 15);
    input.attacks.push(AttackRecord {
        attacker_th: 15,
        defender_th: 15,
        prev_stars: 0,
        new_stars: 3,
        wars_ago: 0,
        attack_order: 1,
    });
    input.donations = DonationRecord {
        given: 10,
        received: 200,
    };
    let result = score(&input, &profile);
    assert!(result.flags.contains(&ScoreFlag::LowAttackSample));
    assert!(result.flags.contains(&ScoreFlag::NoDefenseHistory));
    assert!(result.flags.contains(&ScoreFlag::NetReceiver));
    assert!(!result.flags.contains(&ScoreFlag::NoWarHistory));
    assert!(!result.flags.contains(&ScoreFlag::ClampedInput));
}

#[test]
fn test_clamped_flag() {
    let profile = ScoringProfile::default_v1();
    let mut input = PlayerScoreInput::new("#C", "clamped", 15);
    input.attacks.push(AttackRecord {
        attacker_th: 15,
        defender_th: 15,
        prev_stars: 0,
        new_stars: 6,
        wars_ago: 0,
        attack_order: 1,
    });
    let result = score(&input, &profile);
    assert!(result.flags.contains(&ScoreFlag::ClampedInput));
    assert!(result.ace.is_finite());
}
