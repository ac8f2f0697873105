use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::records::{DonationRecord, PlayerScoreInput};
use crate::model::scores::PlayerScoreResult;
use crate::report::{mean, median};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub player_value: f64,
    pub clan_average: f64,
    pub clan_median: f64,
    pub percentile: f64,
    pub rank: u32,
    pub total_players: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerComparison {
    pub tag: String,
    pub name: String,
    pub ace: MetricComparison,
    pub availability: MetricComparison,
    pub donations: MetricComparison,
    pub donation_ratio: MetricComparison,
}

pub fn donation_ratio(d: &DonationRecord) -> f64 {
    d.given as f64 / d.received.max(1) as f64
}

/// Share of the other players strictly below `value`, 0-100.
pub fn percentile_of(value: f64, column: &[f64]) -> f64 {
    if column.len() <= 1 {
        return 100.0;
    }
    let below = column.iter().filter(|&&v| v < value).count();
    below as f64 / (column.len() - 1) as f64 * 100.0
}

/// Ties share the best rank.
pub fn rank_of(value: f64, column: &[f64]) -> u32 {
    column.iter().filter(|&&v| v > value).count() as u32 + 1
}

pub fn compare_metric(value: f64, column: &[f64]) -> MetricComparison {
    MetricComparison {
        player_value: value,
        clan_average: mean(column),
        clan_median: median(column),
        percentile: percentile_of(value, column),
        rank: rank_of(value, column),
        total_players: column.len() as u32,
    }
}

/// Per-player standing against the rest of the batch, in result order.
pub fn run_stage6(
    results: &[PlayerScoreResult],
    inputs: &[PlayerScoreInput],
) -> Vec<PlayerComparison> {
    let donations_by_tag: HashMap<&str, DonationRecord> = inputs
        .iter()
        .map(|i| (i.tag.as_str(), i.donations))
        .collect();
    let donations_for = |tag: &str| donations_by_tag.get(tag).copied().unwrap_or_default();

    let ace: Vec<f64> = results.iter().map(|r| r.ace).collect();
    let availability: Vec<f64> = results.iter().map(|r| r.availability).collect();
    let given: Vec<f64> = results
        .iter()
        .map(|r| donations_for(&r.tag).given as f64)
        .collect();
    let ratios: Vec<f64> = results
        .iter()
        .map(|r| donation_ratio(&donations_for(&r.tag)))
        .collect();

    results
        .iter()
        .enumerate()
        .map(|(i, r)| PlayerComparison {
            tag: r.tag.clone(),
            name: r.name.clone(),
            ace: compare_metric(ace[i], &ace),
            availability: compare_metric(availability[i], &availability),
            donations: compare_metric(given[i], &given),
            donation_ratio: compare_metric(ratios[i], &ratios),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_compare.rs"]
mod tests;
