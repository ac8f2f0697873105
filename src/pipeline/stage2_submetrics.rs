use crate::metrics::SubmetricRaw;
use crate::metrics::availability::{AvailabilityOutput, compute_availability};
use crate::metrics::capital::compute_capital;
use crate::metrics::defense::compute_defense;
use crate::metrics::donations::compute_donations;
use crate::metrics::offense::compute_offense;
use crate::model::profile::ScoringProfile;
use crate::model::records::PlayerScoreInput;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSubmetrics {
    pub ova: SubmetricRaw,
    pub def: SubmetricRaw,
    pub avail: AvailabilityOutput,
    pub cap: SubmetricRaw,
    pub don: SubmetricRaw,
}

impl PlayerSubmetrics {
    pub fn any_clamped(&self) -> bool {
        self.ova.clamped
            || self.def.clamped
            || self.avail.metric.clamped
            || self.cap.clamped
            || self.don.clamped
    }
}

pub fn run_stage2(input: &PlayerScoreInput, profile: &ScoringProfile) -> PlayerSubmetrics {
    PlayerSubmetrics {
        ova: compute_offense(&input.attacks, profile),
        def: compute_defense(&input.defenses, profile),
        avail: compute_availability(input.participation.as_ref(), profile),
        cap: compute_capital(input.capital.as_ref(), profile),
        don: compute_donations(&input.donations, profile),
    }
}
