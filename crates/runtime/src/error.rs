//! Unified error types surfaced by the runtime API.
//!
//! Every failure here is recoverable at the caller's discretion: a failed
//! operation leaves prior state unchanged and reports what went wrong.
//! Nothing in this crate aborts the process.

use thiserror::Error;

use delve_core::entity::DungeonId;
use delve_core::generate::GenerateError;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A referenced entity does not exist in its store.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// The operation is illegal in the session's current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A gold deduction exceeded the player's balance.
    #[error("insufficient gold: requested {requested}, available {available}")]
    InsufficientGold { requested: i64, available: i64 },

    /// A stored session snapshot could not be parsed on resume. Callers
    /// fall back to starting a fresh run.
    #[error("failed to decode session snapshot")]
    Snapshot(#[from] serde_json::Error),

    /// The content catalog is missing a required pool.
    #[error(transparent)]
    Content(#[from] GenerateError),

    /// A run cannot start in a dungeon without rooms.
    #[error("dungeon {0} has no rooms")]
    EmptyDungeon(DungeonId),
}

impl EngineError {
    pub fn not_found(entity: &'static str, id: impl Into<u64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}
