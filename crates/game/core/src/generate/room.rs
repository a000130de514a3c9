//! Room factory.

use crate::config::GameConfig;
use crate::entity::{Difficulty, Room, RoomId};
use crate::env::{ContentOracle, RollProvider};

use super::{GenerateError, monster::generate_monster, pick};

/// Generate a room for a dungeon of the given level.
///
/// Reward baselines are `20 × dungeon_level` experience and
/// `10 × dungeon_level` gold, scaled by the difficulty's generation
/// multiplier. A monster is attached with the configured probability
/// (80% by default), generated in the same difficulty band.
pub fn generate_room(
    dungeon_level: i32,
    difficulty: Difficulty,
    config: &GameConfig,
    rolls: &impl RollProvider,
    content: &(impl ContentOracle + ?Sized),
) -> Result<Room, GenerateError> {
    let template = pick(content.room_templates(), "room templates", rolls)?;

    let multiplier = difficulty.generation_multiplier();
    let mut room = Room::new(
        RoomId::UNASSIGNED,
        template.name.clone(),
        template.description.clone(),
        dungeon_level,
        difficulty,
    );
    room.experience_reward = (f64::from(20 * dungeon_level) * multiplier) as i32;
    room.gold_reward = (f64::from(10 * dungeon_level) * multiplier) as i64;

    if rolls.percent(config.monster_presence_percent) {
        room.monster = Some(generate_monster(dungeon_level, difficulty, rolls, content)?);
    }

    Ok(room)
}
