//! Structured run snapshot.
//!
//! The snapshot is an explicit record rather than an ad-hoc serialized
//! document: the runtime serializes it only at the persistence boundary,
//! and both save and load go through the same struct so the shape cannot
//! drift between the two.

use crate::config::GameConfig;
use crate::entity::Difficulty;

/// In-progress run state stored alongside a session row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSnapshot {
    pub current_room_index: usize,
    pub total_rooms: usize,
    pub is_monster_defeated: bool,
    pub is_room_completed: bool,
    /// Heals consumed in the current room; reset on room entry and capped
    /// by [`GameConfig::max_heals_per_room`].
    pub heals_used_in_room: u32,
    pub score: i64,
    /// Difficulty chosen for the run, driving score scaling.
    pub difficulty: Difficulty,
}

impl RunSnapshot {
    pub fn new(total_rooms: usize, difficulty: Difficulty) -> Self {
        Self {
            current_room_index: 0,
            total_rooms,
            is_monster_defeated: false,
            is_room_completed: false,
            heals_used_in_room: 0,
            score: 0,
            difficulty,
        }
    }

    /// Whether the run currently points past no further rooms.
    pub fn at_last_room(&self) -> bool {
        self.current_room_index + 1 >= self.total_rooms
    }

    /// Move the pointer to `index` and reset per-room state.
    pub fn enter_room(&mut self, index: usize) {
        self.current_room_index = index;
        self.is_monster_defeated = false;
        self.is_room_completed = false;
        self.heals_used_in_room = 0;
    }

    pub fn heal_available(&self, config: &GameConfig) -> bool {
        self.heals_used_in_room < config.max_heals_per_room
    }

    /// Score granted for clearing a room at the run difficulty.
    pub fn room_score(&self, config: &GameConfig) -> i64 {
        config.room_score_base * (self.difficulty.ordinal() + 1)
    }

    /// Bonus granted for completing the dungeon.
    pub fn completion_bonus(&self, config: &GameConfig) -> i64 {
        config.dungeon_bonus_base * (self.difficulty.ordinal() + 1)
    }
}
