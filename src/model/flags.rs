use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreFlag {
    NoWarHistory,
    LowAttackSample,
    NoDefenseHistory,
    NoParticipationData,
    NoCapitalHistory,
    NetReceiver,
    ClampedInput,
}

pub fn flag_order() -> &'static [ScoreFlag] {
    &[
        ScoreFlag::NoWarHistory,
        ScoreFlag::LowAttackSample,
        ScoreFlag::NoDefenseHistory,
        ScoreFlag::NoParticipationData,
        ScoreFlag::NoCapitalHistory,
        ScoreFlag::NetReceiver,
        ScoreFlag::ClampedInput,
    ]
}

impl ScoreFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreFlag::NoWarHistory => "NO_WAR_HISTORY",
            ScoreFlag::LowAttackSample => "LOW_ATTACK_SAMPLE",
            ScoreFlag::NoDefenseHistory => "NO_DEFENSE_HISTORY",
            ScoreFlag::NoParticipationData => "NO_PARTICIPATION_DATA",
            ScoreFlag::NoCapitalHistory => "NO_CAPITAL_HISTORY",
            ScoreFlag::NetReceiver => "NET_RECEIVER",
            ScoreFlag::ClampedInput => "CLAMPED_INPUT",
        }
    }
}
