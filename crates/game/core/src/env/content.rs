//! Content oracle supplying flavor text pools to the generators.

use crate::entity::{MonsterKind, Rarity};

/// A name/description pair used for dungeon and room generation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    pub name: String,
    pub description: String,
}

impl Template {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Fixed flavor pools consumed by the entity factories.
///
/// Generators draw uniformly from these pools; an empty pool surfaces as a
/// [`crate::generate::GenerateError`] rather than a panic.
pub trait ContentOracle: Send + Sync {
    /// Dungeon name/description templates.
    fn dungeon_templates(&self) -> &[Template];

    /// Room name/description templates.
    fn room_templates(&self) -> &[Template];

    /// Display name pool for a monster kind.
    fn monster_names(&self, kind: MonsterKind) -> &[String];

    /// Artifact name pool for a rarity tier.
    fn artifact_names(&self, rarity: Rarity) -> &[String];
}
