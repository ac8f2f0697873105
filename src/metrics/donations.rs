use crate::metrics::SubmetricRaw;
use crate::model::numeric::clip01;
use crate::model::profile::ScoringProfile;
use crate::model::records::DonationRecord;

/// Share of all troops moved that the player gave. Neutral when nothing moved.
pub fn donation_share(d: &DonationRecord, neutral: f64) -> f64 {
    let total = d.given as f64 + d.received as f64;
    if total == 0.0 {
        neutral
    } else {
        d.given as f64 / total
    }
}

pub fn donation_volume(d: &DonationRecord, scale: f64) -> f64 {
    let given = d.given as f64;
    given / (given + scale)
}

/// Instantaneous balance: `raw` is net troops given, `normalized` blends the
/// given share with a saturating volume term. No sample size; never shrunk.
pub fn compute_donations(d: &DonationRecord, profile: &ScoringProfile) -> SubmetricRaw {
    let share = donation_share(d, profile.neutral);
    let volume = donation_volume(d, profile.donation_volume_scale);
    let w = profile.donation_ratio_weight;

    SubmetricRaw {
        raw: d.given as f64 - d.received as f64,
        normalized: clip01(w * share + (1.0 - w) * volume),
        sample_size: 0,
        clamped: false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/donations.rs"]
mod tests;
