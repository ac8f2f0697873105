use serde::{Deserialize, Serialize};

use crate::model::activity::ActivityEstimate;
use crate::model::flags::ScoreFlag;

/// Per sub-metric audit trail: what was measured, where it landed on the
/// unit scale, how much it was shrunk, and what it contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmetricBreakdown {
    pub raw_value: f64,
    pub normalized_value: f64,
    pub effective_value: f64,
    pub weight: f64,
    pub contribution: f64,
    pub sample_size: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ova: SubmetricBreakdown,
    pub def: SubmetricBreakdown,
    pub avail: SubmetricBreakdown,
    pub cap: SubmetricBreakdown,
    pub don: SubmetricBreakdown,
}

impl ScoreBreakdown {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SubmetricBreakdown)> {
        [
            ("ova", &self.ova),
            ("def", &self.def),
            ("avail", &self.avail),
            ("cap", &self.cap),
            ("don", &self.don),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreResult {
    pub tag: String,
    pub name: String,
    pub ace: f64,
    pub availability: f64,
    pub breakdown: ScoreBreakdown,
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<ScoreFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityEstimate>,
}
