use crate::metrics::SubmetricRaw;
use crate::model::numeric::{clip01, ratio};
use crate::model::profile::ScoringProfile;
use crate::model::records::ParticipationRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailabilityOutput {
    pub metric: SubmetricRaw,
    /// Attendance on a 0-100 scale, before shrinkage.
    pub percent: f64,
    pub war_usage: f64,
    pub capital_usage: f64,
    pub streak: f64,
    pub recent_activity: f64,
}

pub fn is_empty_participation(p: &ParticipationRecord) -> bool {
    p.war_attacks_available == 0
        && p.capital_attacks_available == 0
        && p.wars_considered == 0
        && p.days_active_last30 == 0
        && p.war_attacks_used == 0
        && p.capital_attacks_used == 0
        && p.full_war_streak == 0
}

fn usage(used: u32, available: u32, neutral: f64) -> f64 {
    if available == 0 {
        neutral
    } else {
        clip01(ratio(used, available))
    }
}

pub fn compute_availability(
    participation: Option<&ParticipationRecord>,
    profile: &ScoringProfile,
) -> AvailabilityOutput {
    let neutral = profile.neutral;
    let Some(p) = participation.filter(|p| !is_empty_participation(p)) else {
        return AvailabilityOutput {
            metric: SubmetricRaw::neutral(neutral),
            percent: neutral * 100.0,
            war_usage: neutral,
            capital_usage: neutral,
            streak: neutral,
            recent_activity: neutral,
        };
    };

    let clamped = p.war_attacks_used > p.war_attacks_available
        || p.capital_attacks_used > p.capital_attacks_available
        || p.full_war_streak > p.wars_considered
        || p.days_active_last30 > 30;

    let war_usage = usage(p.war_attacks_used, p.war_attacks_available, neutral);
    let capital_usage = usage(p.capital_attacks_used, p.capital_attacks_available, neutral);
    let streak = usage(p.full_war_streak, p.wars_considered, neutral);
    let recent_activity = clip01(p.days_active_last30 as f64 / 30.0);

    let weights = [
        (profile.avail_war_weight, war_usage),
        (profile.avail_capital_weight, capital_usage),
        (profile.avail_streak_weight, streak),
        (profile.avail_recent_weight, recent_activity),
    ];
    let total: f64 = weights.iter().map(|(w, _)| w).sum();
    let blend = if total > 0.0 {
        weights.iter().map(|(w, v)| w * v).sum::<f64>() / total
    } else {
        neutral
    };
    let blend = clip01(blend);

    AvailabilityOutput {
        metric: SubmetricRaw {
            raw: blend,
            normalized: blend,
            sample_size: p
                .war_attacks_available
                .saturating_add(p.capital_attacks_available),
            clamped,
        },
        percent: blend * 100.0,
        war_usage,
        capital_usage,
        streak,
        recent_activity,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/availability.rs"]
mod tests;
