use crate::metrics::SubmetricRaw;
use crate::metrics::availability::is_empty_participation;
use crate::model::flags::ScoreFlag;
use crate::model::profile::ScoringProfile;
use crate::model::records::PlayerScoreInput;
use crate::model::scores::{PlayerScoreResult, ScoreBreakdown, SubmetricBreakdown};
use crate::pipeline::stage2_submetrics::PlayerSubmetrics;
use crate::pipeline::stage3_confidence::EffectiveValues;

/// ACE and availability are reported on a 0-100 scale.
pub const SCORE_SCALE: f64 = 100.0;

fn entry(raw: &SubmetricRaw, effective: f64, weight: f64) -> SubmetricBreakdown {
    SubmetricBreakdown {
        raw_value: raw.raw,
        normalized_value: raw.normalized,
        effective_value: effective,
        weight,
        contribution: weight * effective * SCORE_SCALE,
        sample_size: raw.sample_size,
    }
}

pub fn build_breakdown(
    sub: &PlayerSubmetrics,
    effective: &EffectiveValues,
    profile: &ScoringProfile,
) -> ScoreBreakdown {
    let w = &profile.weights;
    ScoreBreakdown {
        ova: entry(&sub.ova, effective.ova, w.ova),
        def: entry(&sub.def, effective.def, w.def),
        avail: entry(&sub.avail.metric, effective.avail, w.avail),
        cap: entry(&sub.cap, effective.cap, w.cap),
        don: entry(&sub.don, effective.don, w.don),
    }
}

/// Sum of contributions, accumulated in fixed field order.
pub fn composite(breakdown: &ScoreBreakdown) -> f64 {
    breakdown.iter().map(|(_, b)| b.contribution).sum()
}

pub fn collect_flags(
    input: &PlayerScoreInput,
    sub: &PlayerSubmetrics,
    profile: &ScoringProfile,
) -> Vec<ScoreFlag> {
    let mut flags = Vec::new();
    let attacks = input.attacks.len() as u32;

    if !input.has_war_history() {
        flags.push(ScoreFlag::NoWarHistory);
    }
    if attacks > 0 && attacks < profile.low_attack_sample {
        flags.push(ScoreFlag::LowAttackSample);
    }
    if !input.attacks.is_empty() && input.defenses.is_empty() {
        flags.push(ScoreFlag::NoDefenseHistory);
    }
    if input
        .participation
        .as_ref()
        .is_none_or(is_empty_participation)
    {
        flags.push(ScoreFlag::NoParticipationData);
    }
    if input.capital.is_none_or(|c| c.capital_attacks == 0) {
        flags.push(ScoreFlag::NoCapitalHistory);
    }
    if input.donations.received > input.donations.given {
        flags.push(ScoreFlag::NetReceiver);
    }
    if sub.any_clamped() {
        flags.push(ScoreFlag::ClampedInput);
    }
    flags
}

/// Unranked result for one player; `rank` is assigned by stage 5.
pub fn run_stage4(
    input: &PlayerScoreInput,
    sub: &PlayerSubmetrics,
    effective: &EffectiveValues,
    profile: &ScoringProfile,
) -> PlayerScoreResult {
    let breakdown = build_breakdown(sub, effective, profile);
    PlayerScoreResult {
        tag: input.tag.clone(),
        name: input.name.clone(),
        ace: composite(&breakdown),
        availability: sub.avail.percent,
        breakdown,
        rank: 0,
        flags: collect_flags(input, sub, profile),
        activity: input.activity,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_composite.rs"]
mod tests;
