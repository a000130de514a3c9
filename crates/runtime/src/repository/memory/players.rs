//! In-memory player and monster stores.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use delve_core::entity::{Monster, MonsterId, Player, PlayerId};

use crate::error::{EngineError, Result};
use crate::repository::{MonsterRepository, PlayerRepository};

/// In-memory player store.
#[derive(Default)]
pub struct InMemoryPlayers {
    rows: Mutex<HashMap<u64, Player>>,
    next_id: AtomicU64,
}

impl InMemoryPlayers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayers {
    async fn create(&self, mut player: Player) -> Result<Player> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        player.id = PlayerId(id);
        self.rows.lock().unwrap().insert(id, player.clone());
        Ok(player)
    }

    async fn find(&self, id: PlayerId) -> Result<Option<Player>> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }

    async fn save(&self, player: &Player) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&player.id.0) {
            return Err(EngineError::not_found("player", player.id));
        }
        rows.insert(player.id.0, player.clone());
        Ok(())
    }

    async fn delete(&self, id: PlayerId) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| EngineError::not_found("player", id))
    }
}

/// In-memory store for free-standing monsters.
#[derive(Default)]
pub struct InMemoryMonsters {
    rows: Mutex<HashMap<u64, Monster>>,
    next_id: AtomicU64,
}

impl InMemoryMonsters {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MonsterRepository for InMemoryMonsters {
    async fn create(&self, mut monster: Monster) -> Result<Monster> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        monster.id = MonsterId(id);
        self.rows.lock().unwrap().insert(id, monster.clone());
        Ok(monster)
    }

    async fn find(&self, id: MonsterId) -> Result<Option<Monster>> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }

    async fn save(&self, monster: &Monster) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&monster.id.0) {
            return Err(EngineError::not_found("monster", monster.id));
        }
        rows.insert(monster.id.0, monster.clone());
        Ok(())
    }

    async fn delete(&self, id: MonsterId) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| EngineError::not_found("monster", id))
    }

    async fn list_by_level_range(&self, min: i32, max: i32) -> Result<Vec<Monster>> {
        let rows = self.rows.lock().unwrap();
        let mut monsters: Vec<Monster> = rows
            .values()
            .filter(|m| m.level >= min && m.level <= max)
            .cloned()
            .collect();
        monsters.sort_by_key(|m| m.id);
        Ok(monsters)
    }
}
