use crate::model::numeric::{clip01, finite_or};
use crate::model::profile::ScoringProfile;
use crate::pipeline::stage2_submetrics::PlayerSubmetrics;

/// Post-shrinkage values on the unit scale, one per sub-metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveValues {
    pub ova: f64,
    pub def: f64,
    pub avail: f64,
    pub cap: f64,
    pub don: f64,
}

pub fn confidence(sample_size: u32, k: f64) -> f64 {
    let n = sample_size as f64;
    n / (n + k)
}

/// `neutral + (value - neutral) * n / (n + k)`. A zero sample lands exactly
/// on neutral.
pub fn shrink(normalized: f64, sample_size: u32, profile: &ScoringProfile) -> f64 {
    let value = clip01(finite_or(normalized, profile.neutral));
    let c = confidence(sample_size, profile.shrinkage_k);
    clip01(profile.neutral + (value - profile.neutral) * c)
}

pub fn run_stage3(sub: &PlayerSubmetrics, profile: &ScoringProfile) -> EffectiveValues {
    EffectiveValues {
        ova: shrink(sub.ova.normalized, sub.ova.sample_size, profile),
        def: shrink(sub.def.normalized, sub.def.sample_size, profile),
        avail: shrink(sub.avail.metric.normalized, sub.avail.metric.sample_size, profile),
        cap: shrink(sub.cap.normalized, sub.cap.sample_size, profile),
        don: clip01(finite_or(sub.don.normalized, profile.neutral)),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_confidence.rs"]
mod tests;
