//! Artifact factory and weighted rarity selection.

use strum::IntoEnumIterator;

use crate::entity::{Artifact, ArtifactId, Rarity};
use crate::env::{ContentOracle, RollProvider};

use super::{GenerateError, pick};

/// Draw a rarity tier by cumulative weight over the running total of
/// [`Rarity::weight`] (Common 50, Rare 30, Epic 15, Legendary 4, Mythical 1).
pub fn draw_rarity(rolls: &impl RollProvider) -> Rarity {
    let total: u32 = Rarity::iter().map(Rarity::weight).sum();
    let drawn = rolls.roll(total) - 1;

    let mut cumulative = 0;
    for rarity in Rarity::iter() {
        cumulative += rarity.weight();
        if drawn < cumulative {
            return rarity;
        }
    }
    // drawn < total and the weights sum to total, so the loop always returns
    Rarity::Mythical
}

/// Generate an artifact: rarity from the weighted table, name uniform
/// within the rarity's pool.
pub fn generate_artifact(
    rolls: &impl RollProvider,
    content: &(impl ContentOracle + ?Sized),
) -> Result<Artifact, GenerateError> {
    let rarity = draw_rarity(rolls);
    let name = pick(content.artifact_names(rarity), "artifact names", rolls)?.clone();
    let description = format!(
        "A {} artifact found deep within the dungeon.",
        rarity.to_string().to_lowercase()
    );

    Ok(Artifact {
        id: ArtifactId::UNASSIGNED,
        name,
        description,
        rarity,
    })
}
