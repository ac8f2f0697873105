//! The scoring engine. Each stage is a pure function of its inputs:
//!
//! 1. roster snapshot -> `PlayerScoreInput` (only when no detailed history)
//! 2. per-player sub-metrics (OVA, DEF, AVAIL, CAP, DON)
//! 3. confidence shrinkage toward neutral
//! 4. weighted composite and breakdown
//! 5. deterministic ranking
//! 6. per-player clan comparison
//! 7. report files (CLI only)

use std::collections::HashMap;

use thiserror::Error;

use crate::input::Batch;
use crate::input::roster::RosterSnapshot;
use crate::model::profile::{ConfigError, ScoringProfile};
use crate::model::records::PlayerScoreInput;
use crate::model::scores::PlayerScoreResult;

pub mod stage1_inputs;
pub mod stage2_submetrics;
pub mod stage3_confidence;
pub mod stage4_composite;
pub mod stage5_rank;
pub mod stage6_compare;
pub mod stage7_report;

use stage1_inputs::run_stage1;
use stage2_submetrics::run_stage2;
use stage3_confidence::run_stage3;
use stage4_composite::run_stage4;
use stage5_rank::run_stage5;
use stage6_compare::{PlayerComparison, run_stage6};

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid scoring profile: {0}")]
    Config(#[from] ConfigError),
    #[error("player at index {0} has an empty tag")]
    EmptyTag(usize),
    #[error("duplicate player tag {tag} at indices {first} and {second}")]
    DuplicateTag {
        tag: String,
        first: usize,
        second: usize,
    },
}

fn check_identities(inputs: &[PlayerScoreInput]) -> Result<(), ScoreError> {
    let mut seen = HashMap::with_capacity(inputs.len());
    for (idx, input) in inputs.iter().enumerate() {
        if input.tag.trim().is_empty() {
            return Err(ScoreError::EmptyTag(idx));
        }
        if let Some(&first) = seen.get(input.tag.as_str()) {
            return Err(ScoreError::DuplicateTag {
                tag: input.tag.clone(),
                first,
                second: idx,
            });
        }
        seen.insert(input.tag.as_str(), idx);
    }
    Ok(())
}

pub fn score_player(input: &PlayerScoreInput, profile: &ScoringProfile) -> PlayerScoreResult {
    let sub = run_stage2(input, profile);
    let effective = run_stage3(&sub, profile);
    let result = run_stage4(input, &sub, &effective, profile);
    if sub.any_clamped() {
        tracing::warn!(tag = %input.tag, "clamped malformed numeric fields");
    }
    tracing::debug!(
        tag = %result.tag,
        ace = result.ace,
        availability = result.availability,
        attacks = input.attacks.len(),
        defenses = input.defenses.len(),
        "scored player"
    );
    result
}

/// Scores and ranks a batch. Output has one result per input, ordered by
/// rank. Inputs are never modified.
pub fn score_players(
    inputs: &[PlayerScoreInput],
    profile: &ScoringProfile,
) -> Result<Vec<PlayerScoreResult>, ScoreError> {
    profile.validate()?;
    check_identities(inputs)?;

    let results = inputs
        .iter()
        .map(|input| score_player(input, profile))
        .collect::<Vec<_>>();
    let ranked = run_stage5(results);

    tracing::info!(
        players = ranked.len(),
        profile = profile.label(),
        top = ranked.first().map(|r| r.tag.as_str()).unwrap_or("-"),
        "scored batch"
    );
    Ok(ranked)
}

pub fn score_roster(
    snapshot: &RosterSnapshot,
    profile: &ScoringProfile,
) -> Result<Vec<PlayerScoreResult>, ScoreError> {
    score_players(&run_stage1(snapshot), profile)
}

/// Everything the report layer needs from one run.
#[derive(Debug, Clone)]
pub struct ScoredBatch {
    pub inputs: Vec<PlayerScoreInput>,
    pub results: Vec<PlayerScoreResult>,
    pub comparisons: Vec<PlayerComparison>,
    pub source: &'static str,
}

pub fn score_batch(batch: Batch, profile: &ScoringProfile) -> Result<ScoredBatch, ScoreError> {
    let source = batch.source_label();
    let inputs = match batch {
        Batch::Players(players) => players,
        Batch::Roster(snapshot) => run_stage1(&snapshot),
    };
    let results = score_players(&inputs, profile)?;
    let comparisons = run_stage6(&results, &inputs);
    Ok(ScoredBatch {
        inputs,
        results,
        comparisons,
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
