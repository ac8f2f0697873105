use crate::metrics::{SubmetricRaw, relative_recency_weights, th_curve};
use crate::model::numeric::{clamp_stars, clip01};
use crate::model::profile::ScoringProfile;
use crate::model::records::AttackRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackValue {
    pub value: f64,
    pub clamped: bool,
}

pub fn star_gain(attack: &AttackRecord) -> u8 {
    let prev = clamp_stars(attack.prev_stars);
    let new = clamp_stars(attack.new_stars);
    new.saturating_sub(prev)
}

/// Openers hit a fresh base first in the war; cleanups land on a base a
/// teammate already starred, which is the easier three.
pub fn order_factor(attack: &AttackRecord, profile: &ScoringProfile) -> f64 {
    if clamp_stars(attack.prev_stars) > 0 {
        profile.cleanup_factor
    } else if attack.attack_order <= 1 {
        profile.opener_factor
    } else {
        profile.fresh_factor
    }
}

pub fn attack_value(attack: &AttackRecord, profile: &ScoringProfile) -> AttackValue {
    let clamped = attack.prev_stars > 3
        || attack.new_stars > 3
        || attack.new_stars < attack.prev_stars
        || attack.attacker_th == 0
        || attack.defender_th == 0;

    let gain = star_gain(attack) as f64 / 3.0;
    let th = th_curve(
        attack.attacker_th,
        attack.defender_th,
        profile.th_delta_step,
        profile.th_delta_cap,
    );
    let value = gain * th * order_factor(attack, profile);

    AttackValue { value, clamped }
}

/// Maps a mean attack value onto [0, 1) with `1 - exp(-raw / scale)`.
/// Strictly increasing, so Town Hall and order bonuses above a plain
/// three-star still separate players instead of saturating at 1.0.
pub fn offense_curve(raw: f64, scale: f64) -> f64 {
    clip01(1.0 - (-raw.max(0.0) / scale).exp())
}

/// Recency-weighted mean attack value. An empty history is neutral.
pub fn compute_offense(attacks: &[AttackRecord], profile: &ScoringProfile) -> SubmetricRaw {
    if attacks.is_empty() {
        return SubmetricRaw::neutral(profile.neutral);
    }

    let weights = relative_recency_weights(
        attacks.iter().map(|a| a.wars_ago),
        profile.recency_half_life_wars,
    );
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    let mut clamped = false;
    for (attack, w) in attacks.iter().zip(weights) {
        let v = attack_value(attack, profile);
        weighted += v.value * w;
        total_weight += w;
        clamped |= v.clamped;
    }

    let (raw, normalized) = if total_weight > 0.0 {
        let raw = weighted / total_weight;
        (raw, offense_curve(raw, profile.offense_scale))
    } else {
        (profile.neutral, profile.neutral)
    };

    SubmetricRaw {
        raw,
        normalized,
        sample_size: attacks.len() as u32,
        clamped,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/offense.rs"]
mod tests;
