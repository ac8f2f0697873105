use super::*;

fn record(given: u32, received: u32) -> DonationRecord {
    DonationRecord { given, received }
}

#[test]
fn test_net_positive_donor_beats_net_receiver() {
    let profile = ScoringProfile::default_v1();
    let donor = compute_donations(&record(600, 200), &profile);
    let receiver = compute_donations(&record(200, 600), &profile);
    assert!(donor.normalized > receiver.normalized);
    assert_eq!(donor.raw, 400.0);
    assert_eq!(receiver.raw, -400.0);
}

#[test]
fn test_volume_rewards_bigger_donors() {
    let profile = ScoringProfile::default_v1();
    let big = compute_donations(&record(800, 0), &profile);
    let small = compute_donations(&record(50, 0), &profile);
    assert!(big.normalized > small.normalized);
}

#[test]
fn test_no_donations_uses_neutral_share() {
    let profile = ScoringProfile::default_v1();
    let out = compute_donations(&record(0, 0), &profile);
    assert!((out.normalized - 0.6 * 0.5).abs() < 1e-12);
    assert_eq!(out.sample_size, 0);
}

#[test]
fn test_share_formula() {
    assert_eq!(donation_share(&record(300, 100), 0.5), 0.75);
    assert_eq!(donation_share(&record(0, 0), 0.5), 0.5);
    assert!((donation_volume(&record(500, 0), 500.0) - 0.5).abs() < 1e-12);
}
