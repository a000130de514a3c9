//! Dungeon entity.

use super::{Artifact, DungeonId, Room};

/// A procedurally generated dungeon: an ordered sequence of rooms (sequence
/// order is traversal order, fixed at generation) and at most one artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    pub id: DungeonId,
    pub name: String,
    pub description: String,
    pub rooms: Vec<Room>,
    pub artifact: Option<Artifact>,
    is_explored: bool,
}

impl Dungeon {
    pub fn new(id: DungeonId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            rooms: Vec::new(),
            artifact: None,
            is_explored: false,
        }
    }

    /// Whether the dungeon has been marked explored. Never derived from
    /// per-room state; only [`Dungeon::mark_explored`] sets it.
    pub fn is_explored(&self) -> bool {
        self.is_explored
    }

    pub fn mark_explored(&mut self) {
        self.is_explored = true;
    }

    /// Completion percentage in `[0, 100]`, floored. A dungeon with zero
    /// rooms has progress 0 and is never completed implicitly.
    pub fn progress(&self) -> u32 {
        if self.rooms.is_empty() {
            return 0;
        }
        let explored = self.rooms.iter().filter(|r| r.is_explored()).count();
        (explored * 100 / self.rooms.len()) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Difficulty, RoomId};

    fn room(id: u64) -> Room {
        Room::new(RoomId(id), "Ancient Hall", "", 1, Difficulty::Easy)
    }

    #[test]
    fn progress_floors_toward_zero() {
        let mut dungeon = Dungeon::new(DungeonId(1), "The Lost Temple", "");
        dungeon.rooms = vec![room(1), room(2), room(3)];
        dungeon.rooms[0].mark_explored();
        dungeon.rooms[1].mark_explored();
        assert_eq!(dungeon.progress(), 66);
    }

    #[test]
    fn empty_dungeon_has_zero_progress() {
        let dungeon = Dungeon::new(DungeonId(1), "Ruins of Eternity", "");
        assert_eq!(dungeon.progress(), 0);
        assert!(!dungeon.is_explored());
    }
}
