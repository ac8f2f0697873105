use serde::{Deserialize, Serialize};

use crate::input::lenient;
use crate::model::activity::ActivityEstimate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttackRecord {
    #[serde(alias = "attackerTH", deserialize_with = "lenient::count")]
    pub attacker_th: u32,
    #[serde(alias = "defenderTH", deserialize_with = "lenient::count")]
    pub defender_th: u32,
    #[serde(deserialize_with = "lenient::stars")]
    pub prev_stars: u8,
    #[serde(deserialize_with = "lenient::stars")]
    pub new_stars: u8,
    #[serde(deserialize_with = "lenient::count")]
    pub wars_ago: u32,
    #[serde(default = "first_attack", deserialize_with = "lenient::count")]
    pub attack_order: u32,
}

fn first_attack() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefenseRecord {
    #[serde(alias = "attackerTH", deserialize_with = "lenient::count")]
    pub attacker_th: u32,
    #[serde(alias = "defenderTH", deserialize_with = "lenient::count")]
    pub defender_th: u32,
    #[serde(deserialize_with = "lenient::stars")]
    pub stars_conceded: u8,
    #[serde(deserialize_with = "lenient::count")]
    pub wars_ago: u32,
}

/// Attendance counters over the lookback window. `used <= available` is
/// expected but the availability calculator clamps either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipationRecord {
    #[serde(deserialize_with = "lenient::count")]
    pub war_attacks_used: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub war_attacks_available: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub capital_attacks_used: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub capital_attacks_available: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub full_war_streak: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub wars_considered: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub days_active_last30: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapitalRecord {
    #[serde(deserialize_with = "lenient::loot")]
    pub capital_loot: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub capital_attacks: u32,
    #[serde(deserialize_with = "lenient::rate")]
    pub finisher_rate: f64,
    #[serde(deserialize_with = "lenient::rate")]
    pub one_hit_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationRecord {
    #[serde(alias = "donations", deserialize_with = "lenient::count")]
    pub given: u32,
    #[serde(alias = "donationsReceived", deserialize_with = "lenient::count")]
    pub received: u32,
}

/// One player's scoring input. Missing history is represented by empty
/// vectors and `None`, never by zero-filled placeholder records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreInput {
    pub tag: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub town_hall_level: u32,
    #[serde(default)]
    pub attacks: Vec<AttackRecord>,
    #[serde(default)]
    pub defenses: Vec<DefenseRecord>,
    #[serde(default)]
    pub participation: Option<ParticipationRecord>,
    #[serde(default)]
    pub capital: Option<CapitalRecord>,
    #[serde(default)]
    pub donations: DonationRecord,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_count"
    )]
    pub trophies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityEstimate>,
}

impl PlayerScoreInput {
    pub fn new(tag: impl Into<String>, name: impl Into<String>, town_hall_level: u32) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            town_hall_level,
            ..Self::default()
        }
    }

    /// Any recorded war attack or defense.
    pub fn has_war_history(&self) -> bool {
        !self.attacks.is_empty() || !self.defenses.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/records.rs"]
mod tests;
