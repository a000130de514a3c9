//! Artifact entity and rarity tiers.

use strum::{Display, EnumIter};

use super::ArtifactId;

/// Ordinal rarity classification driving weighted random selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    /// Selection weight in the cumulative-weight rarity draw.
    pub fn weight(self) -> u32 {
        match self {
            Rarity::Common => 50,
            Rarity::Rare => 30,
            Rarity::Epic => 15,
            Rarity::Legendary => 4,
            Rarity::Mythical => 1,
        }
    }
}

/// A collectible artifact, attached to a dungeon at generation time and
/// moved into a player's inventory when claimed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
}
