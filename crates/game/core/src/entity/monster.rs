//! Monster entity.

use strum::{Display, EnumIter};

use super::MonsterId;

/// The closed set of monster types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterKind {
    Dragon,
    Goblin,
    Troll,
    Undead,
    Beast,
    Demon,
    Elemental,
    Humanoid,
}

/// A monster occupying a room.
///
/// Created by the monster factory, mutated only by combat resolution
/// (health depletion), and discarded with its owning room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub level: i32,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub kind: MonsterKind,
}

impl Monster {
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}
