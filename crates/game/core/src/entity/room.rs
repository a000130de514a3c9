//! Room entity.

use super::{Difficulty, Monster, RoomId};

/// One discrete encounter unit within a dungeon's fixed traversal order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub level: i32,
    pub difficulty: Difficulty,
    /// At most one monster, present in roughly 80% of generated rooms.
    pub monster: Option<Monster>,
    is_explored: bool,
    pub experience_reward: i32,
    pub gold_reward: i64,
}

impl Room {
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        description: impl Into<String>,
        level: i32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            level,
            difficulty,
            monster: None,
            is_explored: false,
            experience_reward: 0,
            gold_reward: 0,
        }
    }

    pub fn is_explored(&self) -> bool {
        self.is_explored
    }

    /// Exploration is monotonic: once marked, a room never reverts.
    pub fn mark_explored(&mut self) {
        self.is_explored = true;
    }

    pub fn has_live_monster(&self) -> bool {
        self.monster.as_ref().is_some_and(|m| !m.is_defeated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exploration_never_reverts() {
        let mut room = Room::new(RoomId(1), "Dark Chamber", "", 1, Difficulty::Easy);
        assert!(!room.is_explored());
        room.mark_explored();
        room.mark_explored();
        assert!(room.is_explored());
    }
}
