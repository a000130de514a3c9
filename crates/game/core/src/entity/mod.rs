//! Game entity types.
//!
//! Entities are plain records owned by the persistence boundary; the rules
//! in [`crate::combat`] and [`crate::progression`] receive them by value or
//! mutable reference per operation and never mutate in the background.

mod artifact;
mod difficulty;
mod dungeon;
mod ids;
mod monster;
mod player;
mod room;
mod user;

pub use artifact::{Artifact, Rarity};
pub use difficulty::Difficulty;
pub use dungeon::Dungeon;
pub use ids::{ArtifactId, DungeonId, MonsterId, PlayerId, RoomId, SessionId, UserId};
pub use monster::{Monster, MonsterKind};
pub use player::{Player, PlayerAction};
pub use room::Room;
pub use user::{Admin, User, UserKind};
