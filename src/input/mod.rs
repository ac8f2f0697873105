use std::path::Path;

use serde_json::Value;
use thiserror::Error;

pub mod lenient;
pub mod roster;

use crate::model::records::PlayerScoreInput;
use roster::RosterSnapshot;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidShape(String),
}

/// A scoring batch as it arrives from a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch {
    Players(Vec<PlayerScoreInput>),
    Roster(RosterSnapshot),
}

impl Batch {
    pub fn len(&self) -> usize {
        match self {
            Batch::Players(players) => players.len(),
            Batch::Roster(snapshot) => snapshot.members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            Batch::Players(_) => "players",
            Batch::Roster(_) => "roster",
        }
    }
}

/// Accepts a bare array of players, `{"players": [...]}`, or a roster
/// snapshot `{"members": [...]}`.
pub fn parse_batch(json: &str) -> Result<Batch, InputError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(_) => Ok(Batch::Players(serde_json::from_value(value)?)),
        Value::Object(mut map) => {
            if let Some(players) = map.remove("players") {
                if !players.is_array() {
                    return Err(InputError::InvalidShape(
                        "\"players\" must be an array".to_string(),
                    ));
                }
                Ok(Batch::Players(serde_json::from_value(players)?))
            } else if map.get("members").is_some_and(Value::is_array) {
                Ok(Batch::Roster(serde_json::from_value(Value::Object(map))?))
            } else {
                Err(InputError::InvalidShape(
                    "expected an array of players, a \"players\" array or a \"members\" roster"
                        .to_string(),
                ))
            }
        }
        _ => Err(InputError::InvalidShape(
            "batch must be a JSON array or object".to_string(),
        )),
    }
}

pub fn load_batch(path: &Path) -> Result<Batch, InputError> {
    let json = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let batch = parse_batch(&json)?;
    tracing::info!(
        path = %path.display(),
        source = batch.source_label(),
        entries = batch.len(),
        "loaded scoring batch"
    );
    Ok(batch)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
