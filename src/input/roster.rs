use serde::{Deserialize, Serialize};

use crate::input::lenient;
use crate::model::activity::{ActivityEstimate, ActivityLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClanRole {
    Leader,
    CoLeader,
    Admin,
    Member,
    #[serde(other)]
    Unknown,
}

impl ClanRole {
    pub fn activity_bonus(self) -> f64 {
        match self {
            ClanRole::Leader | ClanRole::CoLeader => 10.0,
            ClanRole::Admin => 5.0,
            ClanRole::Member | ClanRole::Unknown => 0.0,
        }
    }
}

/// A member summary as the snapshot job stores it. Any field beyond the
/// identity may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub tag: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "th", deserialize_with = "lenient::opt_count")]
    pub town_hall_level: Option<u32>,
    #[serde(default)]
    pub role: Option<ClanRole>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub trophies: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub ranked_trophies: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub ranked_league_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub donations: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub donations_received: Option<u32>,
    /// Hero levels: Barbarian King, Archer Queen, Grand Warden, Royal
    /// Champion, Minion Prince.
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub bk: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub aq: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub gw: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub rc: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub mp: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    #[serde(default)]
    pub clan_tag: Option<String>,
    #[serde(default)]
    pub clan_name: Option<String>,
    #[serde(default)]
    pub snapshot_date: Option<String>,
    pub members: Vec<RosterMember>,
}

const ACTIVITY_BASE: f64 = 12.0;
const TROPHY_POINTS: f64 = 30.0;
const TROPHY_CAP: f64 = 500.0;
const DONATION_POINTS: f64 = 20.0;
const DONATION_CAP: f64 = 500.0;

/// Roster-only activity reading on a 0-100 scale.
pub fn estimate_activity(member: &RosterMember) -> ActivityEstimate {
    let trophies = member
        .trophies
        .unwrap_or(0)
        .max(member.ranked_trophies.unwrap_or(0)) as f64;
    let donations = member.donations.unwrap_or(0) as f64;
    let role = member.role.map(ClanRole::activity_bonus).unwrap_or(0.0);

    let score = ACTIVITY_BASE
        + TROPHY_POINTS * trophies.min(TROPHY_CAP) / TROPHY_CAP
        + DONATION_POINTS * donations.min(DONATION_CAP) / DONATION_CAP
        + role;
    let score = score.clamp(0.0, 100.0);

    ActivityEstimate {
        score,
        level: ActivityLevel::from_score(score),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/roster.rs"]
mod tests;
