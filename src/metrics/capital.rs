use crate::metrics::SubmetricRaw;
use crate::model::numeric::{clip01, finite_or};
use crate::model::profile::ScoringProfile;
use crate::model::records::CapitalRecord;

fn unit_rate(rate: f64) -> (f64, bool) {
    let clean = clip01(finite_or(rate, 0.0));
    (clean, clean != rate)
}

pub fn loot_per_attack(capital: &CapitalRecord) -> f64 {
    capital.capital_loot as f64 / capital.capital_attacks.max(1) as f64
}

pub fn compute_capital(capital: Option<&CapitalRecord>, profile: &ScoringProfile) -> SubmetricRaw {
    let Some(c) = capital else {
        return SubmetricRaw::neutral(profile.neutral);
    };

    let (finisher, finisher_clamped) = unit_rate(c.finisher_rate);
    let (one_hit, one_hit_clamped) = unit_rate(c.one_hit_rate);
    let clamped = finisher_clamped || one_hit_clamped;

    if c.capital_attacks == 0 {
        let mut out = SubmetricRaw::neutral(profile.neutral);
        out.clamped = clamped || c.capital_loot > 0;
        return out;
    }

    let loot = clip01(loot_per_attack(c) / profile.capital_loot_ceiling);
    let parts = [
        (profile.capital_loot_weight, loot),
        (profile.capital_finisher_weight, finisher),
        (profile.capital_one_hit_weight, one_hit),
    ];
    let total: f64 = parts.iter().map(|(w, _)| w).sum();
    let raw = if total > 0.0 {
        parts.iter().map(|(w, v)| w * v).sum::<f64>() / total
    } else {
        profile.neutral
    };

    SubmetricRaw {
        raw,
        normalized: clip01(raw),
        sample_size: c.capital_attacks,
        clamped,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/capital.rs"]
mod tests;
