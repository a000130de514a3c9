//! Dungeon factory.

use crate::config::GameConfig;
use crate::entity::{Difficulty, Dungeon, DungeonId};
use crate::env::{ContentOracle, RollProvider};

use super::{GenerateError, artifact::generate_artifact, pick, room::generate_room};

/// Generate a dungeon of `room_count` rooms scaled to the player's level.
///
/// Each room's difficulty is fixed by its index per
/// [`Difficulty::for_room_index`], so every dungeon ramps from Easy toward
/// Extreme. With the configured probability (50% by default) one artifact
/// is attached, rarity-weighted.
pub fn generate_dungeon(
    room_count: usize,
    player_level: i32,
    config: &GameConfig,
    rolls: &impl RollProvider,
    content: &(impl ContentOracle + ?Sized),
) -> Result<Dungeon, GenerateError> {
    let template = pick(content.dungeon_templates(), "dungeon templates", rolls)?;
    let mut dungeon = Dungeon::new(
        DungeonId::UNASSIGNED,
        template.name.clone(),
        template.description.clone(),
    );

    for index in 0..room_count {
        let difficulty = Difficulty::for_room_index(index, room_count);
        dungeon
            .rooms
            .push(generate_room(player_level, difficulty, config, rolls, content)?);
    }

    if rolls.percent(config.artifact_presence_percent) {
        dungeon.artifact = Some(generate_artifact(rolls, content)?);
    }

    Ok(dungeon)
}
