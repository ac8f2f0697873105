use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityLevel {
    Inactive,
    Low,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            ActivityLevel::VeryActive
        } else if score >= 55.0 {
            ActivityLevel::Active
        } else if score >= 45.0 {
            ActivityLevel::Moderate
        } else if score >= 30.0 {
            ActivityLevel::Low
        } else {
            ActivityLevel::Inactive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Inactive => "Inactive",
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "VeryActive",
        }
    }
}

/// Roster-only activity reading, reported next to ACE but never folded into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityEstimate {
    pub score: f64,
    pub level: ActivityLevel,
}
