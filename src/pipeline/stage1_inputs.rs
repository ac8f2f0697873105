use crate::input::roster::{RosterMember, RosterSnapshot, estimate_activity};
use crate::model::records::{DonationRecord, PlayerScoreInput};

/// Builds a scoring input from roster fields alone. War, defense and capital
/// history stay empty and participation stays `None`: a member with no
/// recorded history reads as unknown, not as absent from every war.
pub fn input_from_member(member: &RosterMember) -> PlayerScoreInput {
    PlayerScoreInput {
        tag: member.tag.clone(),
        name: member.name.clone(),
        town_hall_level: member.town_hall_level.unwrap_or(0),
        attacks: Vec::new(),
        defenses: Vec::new(),
        participation: None,
        capital: None,
        donations: DonationRecord {
            given: member.donations.unwrap_or(0),
            received: member.donations_received.unwrap_or(0),
        },
        trophies: member.trophies,
        activity: Some(estimate_activity(member)),
    }
}

/// One input per member, in roster order.
pub fn run_stage1(snapshot: &RosterSnapshot) -> Vec<PlayerScoreInput> {
    snapshot.members.iter().map(input_from_member).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_inputs.rs"]
mod tests;
