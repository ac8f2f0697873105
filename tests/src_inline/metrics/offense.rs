use super::*;

fn attack(prev: u8, new: u8) -> AttackRecord {
    AttackRecord {
        attacker_th: 15,
        defender_th: 15,
        prev_stars: prev,
        new_stars: new,
        wars_ago: 0,
        attack_order: 1,
    }
}

#[test]
fn test_empty_history_is_neutral() {
    let profile = ScoringProfile::default_v1();
    let out = compute_offense(&[], &profile);
    assert_eq!(out.sample_size, 0);
    assert_eq!(out.normalized, profile.neutral);
    assert!(!out.clamped);
}

#[test]
fn test_sample_size_counts_attacks() {
    let profile = ScoringProfile::default_v1();
    let attacks = vec![attack(0, 2), attack(1, 3), attack(0, 0)];
    assert_eq!(compute_offense(&attacks, &profile).sample_size, 3);
}

#[test]
fn test_star_gain_clamps() {
    assert_eq!(star_gain(&attack(0, 3)), 3);
    assert_eq!(star_gain(&attack(2, 1)), 0);
    assert_eq!(star_gain(&attack(1, 9)), 2);
}

#[test]
fn test_monotonic_in_new_stars() {
    let profile = ScoringProfile::default_v1();
    let other = AttackRecord {
        wars_ago: 2,
        attack_order: 2,
        ..attack(1, 2)
    };
    let mut previous = f64::NEG_INFINITY;
    for new in 0..=3 {
        let out = compute_offense(&[attack(0, new), other], &profile);
        assert!(out.raw >= previous);
        assert!(out.normalized >= 0.0);
        previous = out.raw;
    }
}

#[test]
fn test_attacking_up_beats_attacking_down() {
    let profile = ScoringProfile::default_v1();
    let up = AttackRecord {
        defender_th: 16,
        ..attack(0, 2)
    };
    let down = AttackRecord {
        defender_th: 14,
        ..attack(0, 2)
    };
    let even = attack(0, 2);
    let v_up = attack_value(&up, &profile).value;
    let v_even = attack_value(&even, &profile).value;
    let v_down = attack_value(&down, &profile).value;
    assert!(v_up > v_even);
    assert!(v_even > v_down);
}

#[test]
fn test_cleanup_valued_below_opener() {
    let profile = ScoringProfile::default_v1();
    let opener = attack(0, 1);
    let cleanup = attack(1, 2);
    let later_fresh = AttackRecord {
        attack_order: 2,
        ..attack(0, 1)
    };
    assert_eq!(order_factor(&opener, &profile), profile.opener_factor);
    assert_eq!(order_factor(&later_fresh, &profile), profile.fresh_factor);
    assert_eq!(order_factor(&cleanup, &profile), profile.cleanup_factor);
    assert!(attack_value(&opener, &profile).value > attack_value(&cleanup, &profile).value);
}

#[test]
fn test_recent_attacks_dominate() {
    let profile = ScoringProfile::default_v1();
    let good = attack(0, 3);
    let bad = attack(0, 0);
    let recent_good = compute_offense(
        &[
            good,
            AttackRecord {
                wars_ago: 6,
                ..bad
            },
        ],
        &profile,
    );
    let recent_bad = compute_offense(
        &[
            AttackRecord {
                wars_ago: 6,
                ..good
            },
            bad,
        ],
        &profile,
    );
    assert!(recent_good.raw > recent_bad.raw);
}

#[test]
fn test_malformed_attack_flags_clamp() {
    let profile = ScoringProfile::default_v1();
    let out = compute_offense(&[attack(3, 1)], &profile);
    assert!(out.clamped);
    assert_eq!(out.raw, 0.0);
    assert!(out.raw.is_finite());
}

#[test]
fn test_three_star_up_beats_three_star_even() {
    let profile = ScoringProfile::default_v1();
    let fresh = |defender_th| AttackRecord {
        defender_th,
        attack_order: 2,
        ..attack(0, 3)
    };
    let up = compute_offense(&[fresh(16), fresh(16)], &profile);
    let even = compute_offense(&[fresh(15), fresh(15)], &profile);
    assert!(up.raw > 1.0);
    assert!(up.normalized > even.normalized);
    assert!(up.normalized < 1.0);
}

#[test]
fn test_opener_three_star_beats_later_three_star() {
    let profile = ScoringProfile::default_v1();
    let opener = compute_offense(&[attack(0, 3)], &profile);
    let later = compute_offense(
        &[AttackRecord {
            attack_order: 2,
            ..attack(0, 3)
        }],
        &profile,
    );
    assert!(opener.normalized > later.normalized);
}

#[test]
fn test_offense_curve_is_bounded_and_increasing() {
    let mut previous = offense_curve(0.0, 0.6);
    assert_eq!(previous, 0.0);
    for step in 1..=40 {
        let value = offense_curve(step as f64 * 0.1, 0.6);
        assert!(value > previous);
        assert!(value < 1.0);
        previous = value;
    }
    assert_eq!(offense_curve(f64::NAN, 0.6), 0.0);
}

#[test]
fn test_ancient_history_keeps_its_value() {
    let profile = ScoringProfile::default_v1();
    let recent = compute_offense(&[attack(0, 3)], &profile);
    let ancient = compute_offense(
        &[AttackRecord {
            wars_ago: 4000,
            ..attack(0, 3)
        }],
        &profile,
    );
    assert_eq!(ancient.raw.to_bits(), recent.raw.to_bits());
}
