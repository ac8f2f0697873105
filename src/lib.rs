//! ACE (Attack Contribution Efficiency) scoring for clan members.
//!
//! The engine is pure and synchronous: the same batch and profile always
//! produce bit-identical results, and separate batches can be scored in
//! parallel without coordination.

pub mod input;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod report;

pub use input::roster::{RosterMember, RosterSnapshot};
pub use input::{Batch, InputError};
pub use model::profile::{ConfigError, ScoringProfile, SubmetricWeights};
pub use model::records::{
    AttackRecord, CapitalRecord, DefenseRecord, DonationRecord, ParticipationRecord,
    PlayerScoreInput,
};
pub use model::scores::{PlayerScoreResult, ScoreBreakdown, SubmetricBreakdown};
pub use pipeline::{ScoreError, ScoredBatch, score_batch, score_players, score_roster};
