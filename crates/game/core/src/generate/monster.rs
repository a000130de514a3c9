//! Monster factory.

use strum::IntoEnumIterator;

use crate::entity::{Difficulty, Monster, MonsterId, MonsterKind};
use crate::env::{ContentOracle, RollProvider};

use super::{GenerateError, jitter, pick};

/// Generate a monster scaled to a target level within a difficulty band.
///
/// The band shifts the monster's level relative to the target (harder bands
/// skew upward), with a hard floor at level 1. Base stats grow linearly
/// with the resulting level and are jittered ±10% independently:
///
/// ```text
/// health  = 50 + 15 × level
/// attack  =  5 +  2 × level
/// defense =  3 +      level
/// ```
pub fn generate_monster(
    level: i32,
    difficulty: Difficulty,
    rolls: &impl RollProvider,
    content: &(impl ContentOracle + ?Sized),
) -> Result<Monster, GenerateError> {
    let (low, high) = difficulty.level_variation();
    let variation = low + rolls.roll((high - low + 1) as u32) as i32 - 1;
    let monster_level = (level + variation).max(1);

    let kinds: Vec<MonsterKind> = MonsterKind::iter().collect();
    let kind = *pick(&kinds, "monster kinds", rolls)?;
    let name = pick(content.monster_names(kind), "monster names", rolls)?.clone();

    Ok(Monster {
        id: MonsterId::UNASSIGNED,
        name,
        level: monster_level,
        health: jitter(50 + 15 * monster_level, rolls),
        attack: jitter(5 + 2 * monster_level, rolls),
        defense: jitter(3 + monster_level, rolls),
        kind,
    })
}
