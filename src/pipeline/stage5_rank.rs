use std::cmp::Ordering;

use crate::model::scores::PlayerScoreResult;

/// ACE descending, then tag ascending, then original position.
pub fn rank_order(a: &(usize, PlayerScoreResult), b: &(usize, PlayerScoreResult)) -> Ordering {
    b.1.ace
        .total_cmp(&a.1.ace)
        .then_with(|| a.1.tag.cmp(&b.1.tag))
        .then_with(|| a.0.cmp(&b.0))
}

pub fn run_stage5(results: Vec<PlayerScoreResult>) -> Vec<PlayerScoreResult> {
    let mut indexed: Vec<(usize, PlayerScoreResult)> = results.into_iter().enumerate().collect();
    indexed.sort_by(rank_order);
    indexed
        .into_iter()
        .enumerate()
        .map(|(pos, (_, mut result))| {
            result.rank = pos as u32 + 1;
            result
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_rank.rs"]
mod tests;
