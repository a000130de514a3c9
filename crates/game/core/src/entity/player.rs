//! Player entity.

use strum::Display;

use super::{Artifact, PlayerId};

/// Action a player has committed to for the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    #[default]
    None,
    Fight,
    Defend,
    Heal,
    Flee,
}

/// A player character.
///
/// # Invariants
///
/// - `0 <= health <= max_health`
/// - `0 <= experience < level_cap` after [`crate::progression::add_experience`]
///   normalization
///
/// The record is owned by the persistence boundary; rules receive it per
/// operation and return it mutated, with no background writes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub level: i32,
    pub experience: i32,
    /// Experience needed for the next level; grows by 100 per level gained.
    pub level_cap: i32,
    pub gold: i64,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    /// Insertion order is kept but carries no meaning.
    pub inventory: Vec<Artifact>,
    pub current_action: PlayerAction,
    pub high_score: i64,
}

impl Player {
    /// Starting statistics for a freshly created character.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: 1,
            experience: 0,
            level_cap: 100,
            gold: 0,
            health: 100,
            max_health: 100,
            attack: 10,
            defense: 5,
            inventory: Vec::new(),
            current_action: PlayerAction::None,
            high_score: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn change_action(&mut self, action: PlayerAction) {
        self.current_action = action;
    }

    pub fn reset_action(&mut self) {
        self.current_action = PlayerAction::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_at_level_one() {
        let player = Player::new(PlayerId(1), "ayla");
        assert_eq!(player.level, 1);
        assert_eq!(player.health, 100);
        assert_eq!(player.max_health, 100);
        assert_eq!(player.attack, 10);
        assert_eq!(player.defense, 5);
        assert_eq!(player.level_cap, 100);
        assert!(!player.is_dead());
    }
}
