use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid profile json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weight for {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    #[error("invalid constant {name}: {value}")]
    InvalidConstant { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmetricWeights {
    pub ova: f64,
    pub def: f64,
    pub avail: f64,
    pub cap: f64,
    pub don: f64,
}

impl Default for SubmetricWeights {
    fn default() -> Self {
        Self {
            ova: 0.35,
            def: 0.15,
            avail: 0.25,
            cap: 0.15,
            don: 0.10,
        }
    }
}

impl SubmetricWeights {
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("ova", self.ova),
            ("def", self.def),
            ("avail", self.avail),
            ("cap", self.cap),
            ("don", self.don),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.ova + self.def + self.avail + self.cap + self.don
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    Default,
    WarFocused,
    Custom,
}

/// Every tunable constant of the engine. Passed by reference into each
/// stage; nothing reads globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    pub kind: ProfileKind,
    pub weights: SubmetricWeights,
    pub shrinkage_k: f64,
    pub neutral: f64,

    pub th_delta_step: f64,
    pub th_delta_cap: u32,
    pub recency_half_life_wars: f64,
    pub opener_factor: f64,
    pub fresh_factor: f64,
    pub cleanup_factor: f64,
    pub offense_scale: f64,

    pub avail_war_weight: f64,
    pub avail_capital_weight: f64,
    pub avail_streak_weight: f64,
    pub avail_recent_weight: f64,

    pub capital_loot_ceiling: f64,
    pub capital_loot_weight: f64,
    pub capital_finisher_weight: f64,
    pub capital_one_hit_weight: f64,

    pub donation_ratio_weight: f64,
    pub donation_volume_scale: f64,

    pub low_attack_sample: u32,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            kind: ProfileKind::Default,
            weights: SubmetricWeights::default(),
            shrinkage_k: 3.0,
            neutral: 0.5,

            th_delta_step: 0.15,
            th_delta_cap: 4,
            recency_half_life_wars: 3.0,
            opener_factor: 1.10,
            fresh_factor: 1.00,
            cleanup_factor: 0.85,
            offense_scale: 0.6,

            avail_war_weight: 0.45,
            avail_capital_weight: 0.25,
            avail_streak_weight: 0.15,
            avail_recent_weight: 0.15,

            capital_loot_ceiling: 4500.0,
            capital_loot_weight: 0.5,
            capital_finisher_weight: 0.3,
            capital_one_hit_weight: 0.2,

            donation_ratio_weight: 0.6,
            donation_volume_scale: 500.0,

            low_attack_sample: 3,
        }
    }

    pub fn war_focused_v1() -> Self {
        let mut base = Self::default_v1();
        base.kind = ProfileKind::WarFocused;
        base.weights = SubmetricWeights {
            ova: 0.40,
            def: 0.20,
            avail: 0.25,
            cap: 0.05,
            don: 0.10,
        };
        base
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut profile: ScoringProfile = serde_json::from_str(json)?;
        profile.kind = ProfileKind::Custom;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSum(sum));
        }

        let positive = [
            ("shrinkage_k", self.shrinkage_k),
            ("recency_half_life_wars", self.recency_half_life_wars),
            ("capital_loot_ceiling", self.capital_loot_ceiling),
            ("donation_volume_scale", self.donation_volume_scale),
            ("opener_factor", self.opener_factor),
            ("fresh_factor", self.fresh_factor),
            ("cleanup_factor", self.cleanup_factor),
            ("offense_scale", self.offense_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }

        let unit = [
            ("neutral", self.neutral),
            ("donation_ratio_weight", self.donation_ratio_weight),
        ];
        for (name, value) in unit {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }

        let blends = [
            ("avail_war_weight", self.avail_war_weight),
            ("avail_capital_weight", self.avail_capital_weight),
            ("avail_streak_weight", self.avail_streak_weight),
            ("avail_recent_weight", self.avail_recent_weight),
            ("capital_loot_weight", self.capital_loot_weight),
            ("capital_finisher_weight", self.capital_finisher_weight),
            ("capital_one_hit_weight", self.capital_one_hit_weight),
            ("th_delta_step", self.th_delta_step),
        ];
        for (name, value) in blends {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }
        Ok(())
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            ProfileKind::Default => "default_v1",
            ProfileKind::WarFocused => "war_focused_v1",
            ProfileKind::Custom => "custom",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
