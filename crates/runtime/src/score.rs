//! High scores and per-player completion history.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use delve_core::entity::{DungeonId, PlayerId};

use crate::error::Result;
use crate::repository::{HighScoreRepository, HistoryRepository};

/// A player's best score and when it was achieved.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HighScore {
    pub player_id: PlayerId,
    pub score: i64,
    pub achieved_at: DateTime<Utc>,
}

/// A player's completion record: which dungeons they have cleared and when
/// they last played.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameHistory {
    pub player_id: PlayerId,
    pub completed_dungeons: Vec<DungeonId>,
    pub last_played: DateTime<Utc>,
}

/// Submit-if-greater high-score tracking plus leaderboard queries.
#[derive(Clone)]
pub struct HighScoreService {
    scores: Arc<dyn HighScoreRepository>,
}

impl HighScoreService {
    pub fn new(scores: Arc<dyn HighScoreRepository>) -> Self {
        Self { scores }
    }

    /// Record `score` for the player if it beats their current best.
    /// Returns true when the record improved.
    pub async fn submit(&self, player_id: PlayerId, score: i64) -> Result<bool> {
        let current = self.scores.find_by_player(player_id).await?;
        if current.as_ref().is_some_and(|best| score <= best.score) {
            return Ok(false);
        }

        self.scores
            .save(&HighScore {
                player_id,
                score,
                achieved_at: Utc::now(),
            })
            .await?;
        info!(player = %player_id, score, "new personal best");
        Ok(true)
    }

    pub async fn best_for(&self, player_id: PlayerId) -> Result<Option<HighScore>> {
        self.scores.find_by_player(player_id).await
    }

    pub async fn top(&self, count: usize) -> Result<Vec<HighScore>> {
        self.scores.top(count).await
    }

    /// 1-based leaderboard rank, or None for a player with no score yet.
    pub async fn rank(&self, player_id: PlayerId) -> Result<Option<usize>> {
        let Some(best) = self.scores.find_by_player(player_id).await? else {
            return Ok(None);
        };
        let higher = self.scores.count_higher(best.score).await?;
        Ok(Some(higher + 1))
    }
}

/// Append-only completion history per player.
#[derive(Clone)]
pub struct HistoryService {
    histories: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    pub fn new(histories: Arc<dyn HistoryRepository>) -> Self {
        Self { histories }
    }

    /// Add `dungeon_id` to the player's completed set (once) and stamp the
    /// played-at time.
    pub async fn record_completion(&self, player_id: PlayerId, dungeon_id: DungeonId) -> Result<()> {
        let mut history = self
            .histories
            .find_by_player(player_id)
            .await?
            .unwrap_or(GameHistory {
                player_id,
                completed_dungeons: Vec::new(),
                last_played: Utc::now(),
            });

        if !history.completed_dungeons.contains(&dungeon_id) {
            history.completed_dungeons.push(dungeon_id);
        }
        history.last_played = Utc::now();
        self.histories.save(&history).await
    }

    pub async fn completed(&self, player_id: PlayerId) -> Result<Vec<DungeonId>> {
        self.histories.list_completed(player_id).await
    }

    pub async fn total_completed(&self, player_id: PlayerId) -> Result<usize> {
        Ok(self.histories.list_completed(player_id).await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryHighScores, InMemoryHistories};

    fn scores() -> HighScoreService {
        HighScoreService::new(Arc::new(InMemoryHighScores::new()))
    }

    #[tokio::test]
    async fn submit_keeps_only_the_best_score() {
        let service = scores();

        assert!(service.submit(PlayerId(1), 500).await.unwrap());
        assert!(!service.submit(PlayerId(1), 400).await.unwrap());
        assert!(!service.submit(PlayerId(1), 500).await.unwrap());
        assert!(service.submit(PlayerId(1), 900).await.unwrap());

        let best = service.best_for(PlayerId(1)).await.unwrap().unwrap();
        assert_eq!(best.score, 900);
    }

    #[tokio::test]
    async fn rank_counts_strictly_higher_scores() {
        let service = scores();
        service.submit(PlayerId(1), 500).await.unwrap();
        service.submit(PlayerId(2), 900).await.unwrap();
        service.submit(PlayerId(3), 700).await.unwrap();

        assert_eq!(service.rank(PlayerId(2)).await.unwrap(), Some(1));
        assert_eq!(service.rank(PlayerId(1)).await.unwrap(), Some(3));
        assert_eq!(service.rank(PlayerId(9)).await.unwrap(), None);

        let top = service.top(2).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].player_id, PlayerId(2));
    }

    #[tokio::test]
    async fn completions_record_each_dungeon_once() {
        let service = HistoryService::new(Arc::new(InMemoryHistories::new()));

        service
            .record_completion(PlayerId(1), DungeonId(10))
            .await
            .unwrap();
        service
            .record_completion(PlayerId(1), DungeonId(10))
            .await
            .unwrap();
        service
            .record_completion(PlayerId(1), DungeonId(11))
            .await
            .unwrap();

        assert_eq!(service.total_completed(PlayerId(1)).await.unwrap(), 2);
        assert_eq!(
            service.completed(PlayerId(1)).await.unwrap(),
            vec![DungeonId(10), DungeonId(11)]
        );
    }
}
