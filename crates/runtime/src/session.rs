//! Session lifecycle: `NoSession → Active → {Paused ⇄ Active} → Ended`.
//!
//! A session tracks one player's continuous attempt at a dungeon. The
//! structured [`RunSnapshot`] is serialized into the session row only here,
//! at the persistence boundary; save and load share the struct so the
//! snapshot shape cannot drift between the two.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use delve_core::RunSnapshot;
use delve_core::entity::{Difficulty, Dungeon, DungeonId, PlayerId, SessionId};

use crate::error::{EngineError, Result};
use crate::repository::SessionRepository;

/// A play session row as the persistence boundary stores it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub player_id: PlayerId,
    pub dungeon_id: DungeonId,
    pub current_room_index: usize,
    pub is_active: bool,
    pub is_paused: bool,
    pub started_at: DateTime<Utc>,
    pub last_saved: DateTime<Utc>,
    /// Serialized [`RunSnapshot`]; opaque to everything but this module.
    pub state_json: String,
}

impl Session {
    pub fn snapshot(&self) -> Result<RunSnapshot> {
        Ok(serde_json::from_str(&self.state_json)?)
    }
}

/// Owns session rows and enforces the lifecycle transitions.
#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Start a session for `player_id` in `dungeon`, positioned at the
    /// first room.
    ///
    /// At most one session per player is active at any time: an existing
    /// Active or Paused session is force-ended first, never merged.
    pub async fn start(
        &self,
        player_id: PlayerId,
        dungeon: &Dungeon,
        difficulty: Difficulty,
    ) -> Result<Session> {
        if dungeon.rooms.is_empty() {
            return Err(EngineError::EmptyDungeon(dungeon.id));
        }

        if let Some(existing) = self.sessions.find_active_by_player(player_id).await? {
            info!(
                session = %existing.id,
                player = %player_id,
                "force-ending previous session before starting a new one"
            );
            self.end(existing.id).await?;
        }

        let snapshot = RunSnapshot::new(dungeon.rooms.len(), difficulty);
        let now = Utc::now();
        let session = self
            .sessions
            .create(Session {
                id: SessionId::UNASSIGNED,
                player_id,
                dungeon_id: dungeon.id,
                current_room_index: 0,
                is_active: true,
                is_paused: false,
                started_at: now,
                last_saved: now,
                state_json: serde_json::to_string(&snapshot)?,
            })
            .await?;

        info!(session = %session.id, player = %player_id, dungeon = %dungeon.id, "session started");
        Ok(session)
    }

    pub async fn find(&self, id: SessionId) -> Result<Session> {
        self.sessions
            .find(id)
            .await?
            .ok_or_else(|| EngineError::not_found("session", id))
    }

    pub async fn active_for(&self, player_id: PlayerId) -> Result<Option<Session>> {
        self.sessions.find_active_by_player(player_id).await
    }

    /// Update the current room pointer. Legal only while Active.
    pub async fn move_to_room(&self, id: SessionId, room_index: usize) -> Result<Session> {
        let mut session = self.find(id).await?;
        if !session.is_active {
            return Err(EngineError::invalid_state(
                "cannot move rooms in a session that is not active",
            ));
        }

        session.current_room_index = room_index;
        self.sessions.save(&session).await?;
        debug!(session = %id, room_index, "moved to room");
        Ok(session)
    }

    /// Persist a snapshot, optionally pausing. Legal from both Active and
    /// Paused; an ended session can still be checkpointed for inspection.
    pub async fn save(
        &self,
        id: SessionId,
        snapshot: &RunSnapshot,
        paused: bool,
    ) -> Result<Session> {
        let mut session = self.find(id).await?;
        session.state_json = serde_json::to_string(snapshot)?;
        session.current_room_index = snapshot.current_room_index;
        session.is_paused = paused;
        session.last_saved = Utc::now();
        self.sessions.save(&session).await?;
        debug!(session = %id, paused, "session saved");
        Ok(session)
    }

    /// Clear the pause flag and hand back the stored snapshot.
    ///
    /// A snapshot that fails to parse surfaces as
    /// [`EngineError::Snapshot`]; the caller falls back to starting a new
    /// run. An ended session cannot be resumed.
    pub async fn resume(&self, id: SessionId) -> Result<(Session, RunSnapshot)> {
        let mut session = self.find(id).await?;
        if !session.is_active {
            return Err(EngineError::invalid_state(
                "cannot resume a session that has ended",
            ));
        }

        let snapshot = session.snapshot()?;
        session.is_paused = false;
        self.sessions.save(&session).await?;
        info!(session = %id, "session resumed");
        Ok((session, snapshot))
    }

    /// Mark the session inactive. Idempotent; the pause flag is left as-is.
    pub async fn end(&self, id: SessionId) -> Result<Session> {
        let mut session = self.find(id).await?;
        session.is_active = false;
        self.sessions.save(&session).await?;
        info!(session = %id, "session ended");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySessions;
    use delve_core::entity::{DungeonId, Room, RoomId};

    fn dungeon(rooms: usize) -> Dungeon {
        let mut dungeon = Dungeon::new(DungeonId(1), "Tower of Shadows", "");
        for index in 0..rooms {
            dungeon.rooms.push(Room::new(
                RoomId(index as u64 + 1),
                "Dark Chamber",
                "",
                1,
                Difficulty::Easy,
            ));
        }
        dungeon
    }

    fn service() -> SessionService {
        SessionService::new(Arc::new(InMemorySessions::new()))
    }

    #[tokio::test]
    async fn starting_twice_leaves_exactly_one_active_session() {
        let service = service();
        let dungeon = dungeon(3);

        let first = service
            .start(PlayerId(1), &dungeon, Difficulty::Easy)
            .await
            .unwrap();
        let second = service
            .start(PlayerId(1), &dungeon, Difficulty::Hard)
            .await
            .unwrap();

        let ended = service.find(first.id).await.unwrap();
        assert!(!ended.is_active);
        let active = service.active_for(PlayerId(1)).await.unwrap().unwrap();
        assert_eq!(active.id, second.id);
    }

    #[tokio::test]
    async fn empty_dungeon_cannot_host_a_session() {
        let service = service();
        let err = service
            .start(PlayerId(1), &dungeon(0), Difficulty::Easy)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptyDungeon(_)));
    }

    #[tokio::test]
    async fn move_is_rejected_once_ended() {
        let service = service();
        let session = service
            .start(PlayerId(1), &dungeon(3), Difficulty::Easy)
            .await
            .unwrap();

        service.end(session.id).await.unwrap();
        let err = service.move_to_room(session.id, 1).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidState(_)));
    }

    #[tokio::test]
    async fn save_and_resume_round_trip_the_snapshot() {
        let service = service();
        let session = service
            .start(PlayerId(1), &dungeon(3), Difficulty::Medium)
            .await
            .unwrap();

        let mut snapshot = session.snapshot().unwrap();
        snapshot.enter_room(2);
        snapshot.score = 350;
        snapshot.heals_used_in_room = 1;
        let saved = service.save(session.id, &snapshot, true).await.unwrap();
        assert!(saved.is_paused);
        assert_eq!(saved.current_room_index, 2);

        let (resumed, restored) = service.resume(session.id).await.unwrap();
        assert!(!resumed.is_paused);
        assert_eq!(restored, snapshot);
    }

    #[tokio::test]
    async fn corrupt_snapshot_surfaces_as_snapshot_error() {
        let service = service();
        let mut session = service
            .start(PlayerId(1), &dungeon(3), Difficulty::Easy)
            .await
            .unwrap();

        session.state_json = "{not json".into();
        service.sessions.save(&session).await.unwrap();

        let err = service.resume(session.id).await.unwrap_err();
        assert!(matches!(err, EngineError::Snapshot(_)));
    }

    #[tokio::test]
    async fn end_is_idempotent_and_keeps_the_pause_flag() {
        let service = service();
        let session = service
            .start(PlayerId(1), &dungeon(2), Difficulty::Easy)
            .await
            .unwrap();
        let snapshot = session.snapshot().unwrap();
        service.save(session.id, &snapshot, true).await.unwrap();

        service.end(session.id).await.unwrap();
        let again = service.end(session.id).await.unwrap();

        assert!(!again.is_active);
        assert!(again.is_paused);
    }

    #[tokio::test]
    async fn resume_after_end_is_rejected() {
        let service = service();
        let session = service
            .start(PlayerId(1), &dungeon(2), Difficulty::Easy)
            .await
            .unwrap();
        service.end(session.id).await.unwrap();

        let err = service.resume(session.id).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidState(_)));
    }
}
