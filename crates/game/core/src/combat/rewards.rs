//! Victory and defeat resolution.

use crate::entity::{Player, Room};
use crate::env::RollProvider;
use crate::progression;

use super::report::{DefeatReport, VictoryReport};

/// Apply a combat victory: the room's base rewards are scaled by its
/// difficulty multiplier, plus a flat +0.2 when a fresh d20 lands 15 or
/// higher. Experience and gold flow through the progression engine and the
/// room is marked explored.
pub fn resolve_victory(
    player: &mut Player,
    room: &mut Room,
    rolls: &impl RollProvider,
) -> VictoryReport {
    let lucky = rolls.roll(20) >= 15;
    let multiplier = room.difficulty.reward_multiplier() + if lucky { 0.2 } else { 0.0 };

    let experience = (f64::from(room.experience_reward) * multiplier) as i32;
    let gold = (room.gold_reward as f64 * multiplier) as i64;

    let level_ups = progression::add_experience(player, experience);
    progression::add_gold(player, gold);
    room.mark_explored();

    VictoryReport {
        experience,
        gold,
        lucky,
        level_ups,
    }
}

/// Apply a combat defeat: a difficulty-indexed share of carried gold is
/// lost and health resets to a difficulty-indexed share of max health.
/// Harder rooms take more gold and leave the player weaker.
pub fn resolve_defeat(player: &mut Player, room: &Room) -> DefeatReport {
    let gold_lost = (player.gold as f64 * room.difficulty.gold_loss_rate()) as i64;
    progression::remove_gold(player, gold_lost);

    player.health = (f64::from(player.max_health) * room.difficulty.health_restore_rate()) as i32;

    DefeatReport {
        gold_lost,
        health_restored: player.health,
    }
}
