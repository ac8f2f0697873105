use super::*;
use crate::input::parse_batch;
use crate::model::scores::PlayerScoreResult;
use crate::pipeline::score_batch;

const ROSTER: &str = r##"{
  "clanTag": "#2PR8R8V8P",
  "members": [
    {"tag": "#CAS", "name": "Casual", "trophies": 3000, "donations": 50, "role": "member"},
    {"tag": "#TOP", "name": "Top Donor", "trophies": 4200, "donations": 800, "role": "admin"}
  ]
}"##;

#[test]
fn test_write_reports_creates_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let profile = ScoringProfile::default_v1();
    let batch = score_batch(parse_batch(ROSTER).unwrap(), &profile).unwrap();
    write_reports(&batch, &profile, dir.path()).unwrap();

    for name in [SCORES_FILE, SUMMARY_FILE, COMPARISON_FILE, REPORT_FILE] {
        assert!(dir.path().join(name).exists(), "missing {name}");
    }

    let scores = std::fs::read_to_string(dir.path().join(SCORES_FILE)).unwrap();
    let parsed: Vec<PlayerScoreResult> = serde_json::from_str(&scores).unwrap();
    assert_eq!(parsed.len(), batch.results.len());
    for (read, scored) in parsed.iter().zip(&batch.results) {
        assert_eq!(read.tag, scored.tag);
        assert_eq!(read.rank, scored.rank);
        assert_eq!(read.flags, scored.flags);
        assert!((read.ace - scored.ace).abs() < 1e-9);
    }
    assert_eq!(parsed[0].tag, "#TOP");

    let summary: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["n_players"], 2);
    assert_eq!(summary["source"], "roster");
    assert_eq!(summary["top_tag"], "#TOP");

    let report = std::fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
    assert!(report.contains("Top Donor"));
    assert!(report.contains("Roster activity"));
}

#[test]
fn test_reports_are_deterministic() {
    let profile = ScoringProfile::default_v1();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    for dir in [&a, &b] {
        let batch = score_batch(parse_batch(ROSTER).unwrap(), &profile).unwrap();
        write_reports(&batch, &profile, dir.path()).unwrap();
    }
    for name in [SCORES_FILE, SUMMARY_FILE, COMPARISON_FILE, REPORT_FILE] {
        let left = std::fs::read(a.path().join(name)).unwrap();
        let right = std::fs::read(b.path().join(name)).unwrap();
        assert_eq!(left, right, "{name} differs");
    }
}
