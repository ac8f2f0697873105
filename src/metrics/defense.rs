use crate::metrics::{SubmetricRaw, relative_recency_weights, th_curve};
use crate::model::numeric::{clamp_stars, clip01};
use crate::model::profile::ScoringProfile;
use crate::model::records::DefenseRecord;

/// Stars conceded on the unit scale, scaled by how outmatched the base
/// was. Giving up three to a higher Town Hall costs less than to a lower one.
pub fn defense_penalty(defense: &DefenseRecord, profile: &ScoringProfile) -> f64 {
    let stars = clamp_stars(defense.stars_conceded) as f64 / 3.0;
    let th = th_curve(
        defense.defender_th,
        defense.attacker_th,
        profile.th_delta_step,
        profile.th_delta_cap,
    );
    stars / th
}

pub fn compute_defense(defenses: &[DefenseRecord], profile: &ScoringProfile) -> SubmetricRaw {
    if defenses.is_empty() {
        return SubmetricRaw::neutral(profile.neutral);
    }

    let weights = relative_recency_weights(
        defenses.iter().map(|d| d.wars_ago),
        profile.recency_half_life_wars,
    );
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    let mut clamped = false;
    for (defense, w) in defenses.iter().zip(weights) {
        weighted += defense_penalty(defense, profile) * w;
        total_weight += w;
        clamped |= defense.stars_conceded > 3 || defense.attacker_th == 0 || defense.defender_th == 0;
    }

    let raw = if total_weight > 0.0 {
        1.0 - weighted / total_weight
    } else {
        profile.neutral
    };

    SubmetricRaw {
        raw,
        normalized: clip01(raw),
        sample_size: defenses.len() as u32,
        clamped,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/defense.rs"]
mod tests;
