//! In-memory high-score and history stores.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use delve_core::entity::{DungeonId, PlayerId};

use crate::error::Result;
use crate::repository::{HighScoreRepository, HistoryRepository};
use crate::score::{GameHistory, HighScore};

/// In-memory high-score store, one row per player.
#[derive(Default)]
pub struct InMemoryHighScores {
    rows: Mutex<HashMap<u64, HighScore>>,
}

impl InMemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HighScoreRepository for InMemoryHighScores {
    async fn find_by_player(&self, player_id: PlayerId) -> Result<Option<HighScore>> {
        Ok(self.rows.lock().unwrap().get(&player_id.0).cloned())
    }

    async fn save(&self, entry: &HighScore) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(entry.player_id.0, entry.clone());
        Ok(())
    }

    async fn top(&self, count: usize) -> Result<Vec<HighScore>> {
        let rows = self.rows.lock().unwrap();
        let mut entries: Vec<HighScore> = rows.values().cloned().collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(count);
        Ok(entries)
    }

    async fn count_higher(&self, score: i64) -> Result<usize> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().filter(|e| e.score > score).count())
    }
}

/// In-memory history store, one row per player.
#[derive(Default)]
pub struct InMemoryHistories {
    rows: Mutex<HashMap<u64, GameHistory>>,
}

impl InMemoryHistories {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistories {
    async fn find_by_player(&self, player_id: PlayerId) -> Result<Option<GameHistory>> {
        Ok(self.rows.lock().unwrap().get(&player_id.0).cloned())
    }

    async fn save(&self, history: &GameHistory) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(history.player_id.0, history.clone());
        Ok(())
    }

    async fn list_completed(&self, player_id: PlayerId) -> Result<Vec<DungeonId>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(&player_id.0)
            .map(|h| h.completed_dungeons.clone())
            .unwrap_or_default())
    }
}
