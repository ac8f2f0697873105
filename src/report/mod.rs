use serde::Serialize;

use crate::model::activity::ActivityLevel;
use crate::model::flags::flag_order;
use crate::model::profile::{ScoringProfile, SubmetricWeights};
use crate::pipeline::ScoredBatch;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub min: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagStat {
    pub flag: &'static str,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelStat {
    pub level: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub source: String,
    pub profile: String,
    pub weights: SubmetricWeights,
    pub shrinkage_k: f64,
    pub n_players: usize,
    pub top_tag: Option<String>,
    pub ace: NamedStats,
    pub availability: NamedStats,
    pub flags: Vec<FlagStat>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub activity_levels: Vec<LevelStat>,
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn named_stats(name: &'static str, values: &[f64]) -> NamedStats {
    NamedStats {
        name,
        min: quantile_indexed(values, 0.0),
        median: median(values),
        p10: p10(values),
        p90: p90(values),
        max: quantile_indexed(values, 1.0),
    }
}

const LEVELS: [ActivityLevel; 5] = [
    ActivityLevel::VeryActive,
    ActivityLevel::Active,
    ActivityLevel::Moderate,
    ActivityLevel::Low,
    ActivityLevel::Inactive,
];

pub fn build_summary(batch: &ScoredBatch, profile: &ScoringProfile) -> SummaryData {
    let results = &batch.results;
    let n = results.len();
    let ace: Vec<f64> = results.iter().map(|r| r.ace).collect();
    let availability: Vec<f64> = results.iter().map(|r| r.availability).collect();

    let flags = flag_order()
        .iter()
        .map(|&flag| {
            let count = results.iter().filter(|r| r.flags.contains(&flag)).count();
            FlagStat {
                flag: flag.as_str(),
                count,
                fraction: if n == 0 { 0.0 } else { count as f64 / n as f64 },
            }
        })
        .collect();

    let activity_levels = if results.iter().any(|r| r.activity.is_some()) {
        LEVELS
            .iter()
            .map(|&level| LevelStat {
                level: level.label(),
                count: results
                    .iter()
                    .filter(|r| r.activity.is_some_and(|a| a.level == level))
                    .count(),
            })
            .collect()
    } else {
        Vec::new()
    };

    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        source: batch.source.to_string(),
        profile: profile.label().to_string(),
        weights: profile.weights,
        shrinkage_k: profile.shrinkage_k,
        n_players: n,
        top_tag: results.first().map(|r| r.tag.clone()),
        ace: named_stats("ace", &ace),
        availability: named_stats("availability", &availability),
        flags,
        activity_levels,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
