//! In-memory repository implementations.
//!
//! Mutex-backed hash maps with the same contracts a database-backed
//! implementation would honor. Used by tests and by embedding clients that
//! do not need durability.

mod artifacts;
mod dungeons;
mod players;
mod scores;
mod sessions;

use std::sync::Arc;

pub use artifacts::InMemoryArtifacts;
pub use dungeons::InMemoryDungeons;
pub use players::{InMemoryMonsters, InMemoryPlayers};
pub use scores::{InMemoryHighScores, InMemoryHistories};
pub use sessions::InMemorySessions;

/// The full set of in-memory stores, wired together.
#[derive(Clone, Default)]
pub struct InMemoryWorld {
    pub players: Arc<InMemoryPlayers>,
    pub monsters: Arc<InMemoryMonsters>,
    pub dungeons: Arc<InMemoryDungeons>,
    pub artifacts: Arc<InMemoryArtifacts>,
    pub sessions: Arc<InMemorySessions>,
    pub high_scores: Arc<InMemoryHighScores>,
    pub histories: Arc<InMemoryHistories>,
}

impl InMemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }
}
