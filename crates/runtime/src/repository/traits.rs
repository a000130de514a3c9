//! Repository contracts for the entities owned by the persistence boundary.

use async_trait::async_trait;

use delve_core::entity::{
    Artifact, ArtifactId, Dungeon, DungeonId, Monster, MonsterId, Player, PlayerId, Rarity,
    SessionId,
};

use crate::error::Result;
use crate::score::{GameHistory, HighScore};
use crate::session::Session;

/// Store for player characters.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Persist a new player, assigning its identity.
    async fn create(&self, player: Player) -> Result<Player>;

    async fn find(&self, id: PlayerId) -> Result<Option<Player>>;

    /// Write back a mutated player. The player must already exist.
    async fn save(&self, player: &Player) -> Result<()>;

    async fn delete(&self, id: PlayerId) -> Result<()>;
}

/// Store for free-standing monsters (monsters owned by a room travel with
/// their dungeon instead).
#[async_trait]
pub trait MonsterRepository: Send + Sync {
    async fn create(&self, monster: Monster) -> Result<Monster>;

    async fn find(&self, id: MonsterId) -> Result<Option<Monster>>;

    async fn save(&self, monster: &Monster) -> Result<()>;

    async fn delete(&self, id: MonsterId) -> Result<()>;

    /// Monsters whose level lies in `[min, max]` inclusive.
    async fn list_by_level_range(&self, min: i32, max: i32) -> Result<Vec<Monster>>;
}

/// Store for dungeons, including their rooms and attached artifact.
#[async_trait]
pub trait DungeonRepository: Send + Sync {
    /// Persist a new dungeon, assigning identity to it and to every nested
    /// room, monster, and artifact.
    async fn create(&self, dungeon: Dungeon) -> Result<Dungeon>;

    async fn find(&self, id: DungeonId) -> Result<Option<Dungeon>>;

    async fn save(&self, dungeon: &Dungeon) -> Result<()>;

    async fn delete(&self, id: DungeonId) -> Result<()>;

    async fn list_by_explored(&self, explored: bool) -> Result<Vec<Dungeon>>;
}

/// Store for artifacts outside any dungeon or inventory.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    async fn create(&self, artifact: Artifact) -> Result<Artifact>;

    async fn find(&self, id: ArtifactId) -> Result<Option<Artifact>>;

    async fn delete(&self, id: ArtifactId) -> Result<()>;

    async fn list_by_rarity(&self, rarity: Rarity) -> Result<Vec<Artifact>>;
}

/// Store for play sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: Session) -> Result<Session>;

    async fn find(&self, id: SessionId) -> Result<Option<Session>>;

    async fn save(&self, session: &Session) -> Result<()>;

    async fn delete(&self, id: SessionId) -> Result<()>;

    /// The player's session with `is_active = true`, if any. The engine
    /// maintains at most one.
    async fn find_active_by_player(&self, player_id: PlayerId) -> Result<Option<Session>>;

    async fn list_by_player(&self, player_id: PlayerId) -> Result<Vec<Session>>;
}

/// Store for per-player best scores.
#[async_trait]
pub trait HighScoreRepository: Send + Sync {
    async fn find_by_player(&self, player_id: PlayerId) -> Result<Option<HighScore>>;

    async fn save(&self, entry: &HighScore) -> Result<()>;

    /// Best scores in descending order, at most `count` of them.
    async fn top(&self, count: usize) -> Result<Vec<HighScore>>;

    /// Number of players holding a strictly higher score.
    async fn count_higher(&self, score: i64) -> Result<usize>;
}

/// Store for per-player completion history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn find_by_player(&self, player_id: PlayerId) -> Result<Option<GameHistory>>;

    async fn save(&self, history: &GameHistory) -> Result<()>;

    async fn list_completed(&self, player_id: PlayerId) -> Result<Vec<DungeonId>>;
}
