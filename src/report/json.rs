use crate::model::scores::PlayerScoreResult;
use crate::pipeline::stage6_compare::PlayerComparison;
use crate::report::SummaryData;

/// The wire encoding: a JSON array of results in rank order.
pub fn render_scores_json(results: &[PlayerScoreResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

pub fn render_summary_json(summary: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

pub fn render_comparison_json(comparisons: &[PlayerComparison]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(comparisons)
}
