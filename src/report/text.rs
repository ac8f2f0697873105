use std::fmt::Write;

use crate::model::scores::PlayerScoreResult;
use crate::report::{SummaryData, format_score};

pub fn render_report_text(summary: &SummaryData, results: &[PlayerScoreResult]) -> String {
    let mut out = String::new();

    out.push_str("ACE Contribution Report\n");
    out.push_str("=======================\n\n");

    out.push_str("1. Batch\n");
    let _ = writeln!(out, "Players: {}", summary.n_players);
    let _ = writeln!(out, "Source: {}", summary.source);
    let _ = writeln!(
        out,
        "Profile: {} (shrinkage k={})",
        summary.profile, summary.shrinkage_k
    );
    let w = &summary.weights;
    let _ = writeln!(
        out,
        "Weights: ova={} def={} avail={} cap={} don={}",
        w.ova, w.def, w.avail, w.cap, w.don
    );
    let _ = writeln!(
        out,
        "ACE median: {} (p10 {}, p90 {})",
        format_score(summary.ace.median),
        format_score(summary.ace.p10),
        format_score(summary.ace.p90)
    );
    let _ = writeln!(
        out,
        "Availability median: {}%\n",
        format_score(summary.availability.median)
    );

    out.push_str("2. Leaderboard\n");
    let _ = writeln!(
        out,
        "{:>4}  {:<12} {:<16} {:>7} {:>7}  {:>5} {:>5} {:>5} {:>5} {:>5}",
        "rank", "tag", "name", "ace", "avail%", "ova", "def", "avl", "cap", "don"
    );
    for r in results {
        let b = &r.breakdown;
        let _ = writeln!(
            out,
            "{:>4}  {:<12} {:<16} {:>7} {:>7}  {:>5} {:>5} {:>5} {:>5} {:>5}",
            r.rank,
            truncate(&r.tag, 12),
            truncate(&r.name, 16),
            format_score(r.ace),
            format_score(r.availability),
            format_score(b.ova.contribution),
            format_score(b.def.contribution),
            format_score(b.avail.contribution),
            format_score(b.cap.contribution),
            format_score(b.don.contribution),
        );
    }
    out.push('\n');

    out.push_str("3. Quality and caveats\n");
    for stat in &summary.flags {
        let _ = writeln!(
            out,
            "{} fraction: {}",
            stat.flag,
            format_score(stat.fraction)
        );
    }
    if !summary.activity_levels.is_empty() {
        let levels = summary
            .activity_levels
            .iter()
            .map(|l| format!("{}={}", l.level, l.count))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Roster activity: {}", levels);
    }
    out.push_str(
        "Note: sub-scores with few recorded events are pulled toward neutral; \
         a player with no history scores near the middle, not the bottom.\n",
    );

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
