//! In-memory dungeon store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use delve_core::entity::{ArtifactId, Dungeon, DungeonId, MonsterId, RoomId};

use crate::error::{EngineError, Result};
use crate::repository::DungeonRepository;

/// In-memory dungeon store. Rooms, their monsters, and the attached
/// artifact are stored inline with the dungeon and receive identity on
/// create, mirroring a cascading insert.
#[derive(Default)]
pub struct InMemoryDungeons {
    rows: Mutex<HashMap<u64, Dungeon>>,
    next_dungeon_id: AtomicU64,
    next_room_id: AtomicU64,
    next_monster_id: AtomicU64,
    next_artifact_id: AtomicU64,
}

impl InMemoryDungeons {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DungeonRepository for InMemoryDungeons {
    async fn create(&self, mut dungeon: Dungeon) -> Result<Dungeon> {
        let id = self.next_dungeon_id.fetch_add(1, Ordering::Relaxed) + 1;
        dungeon.id = DungeonId(id);

        for room in &mut dungeon.rooms {
            room.id = RoomId(self.next_room_id.fetch_add(1, Ordering::Relaxed) + 1);
            if let Some(monster) = &mut room.monster {
                monster.id = MonsterId(self.next_monster_id.fetch_add(1, Ordering::Relaxed) + 1);
            }
        }
        if let Some(artifact) = &mut dungeon.artifact {
            artifact.id = ArtifactId(self.next_artifact_id.fetch_add(1, Ordering::Relaxed) + 1);
        }

        self.rows.lock().unwrap().insert(id, dungeon.clone());
        Ok(dungeon)
    }

    async fn find(&self, id: DungeonId) -> Result<Option<Dungeon>> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }

    async fn save(&self, dungeon: &Dungeon) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&dungeon.id.0) {
            return Err(EngineError::not_found("dungeon", dungeon.id));
        }
        rows.insert(dungeon.id.0, dungeon.clone());
        Ok(())
    }

    async fn delete(&self, id: DungeonId) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| EngineError::not_found("dungeon", id))
    }

    async fn list_by_explored(&self, explored: bool) -> Result<Vec<Dungeon>> {
        let rows = self.rows.lock().unwrap();
        let mut dungeons: Vec<Dungeon> = rows
            .values()
            .filter(|d| d.is_explored() == explored)
            .cloned()
            .collect();
        dungeons.sort_by_key(|d| d.id);
        Ok(dungeons)
    }
}
