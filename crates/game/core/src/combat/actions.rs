//! Player and monster combat actions.

use crate::entity::{Monster, Player};
use crate::env::RollProvider;

use super::damage::roll_damage;
use super::hit::check_hit;
use super::report::{AttackReport, DefendReport, FleeReport, HealReport};

/// Resolve a player attack against a monster.
///
/// On a hit, damage is applied to the monster's health, floored at 0. On a
/// miss nothing is mutated; the report carries the narration. Defeat
/// handling (rewards, room state) is the caller's responsibility.
pub fn player_attacks(
    player: &Player,
    monster: &mut Monster,
    rolls: &impl RollProvider,
) -> AttackReport {
    if !check_hit(player.level, monster.level, rolls) {
        return AttackReport {
            hit: false,
            damage: 0,
            target_health: monster.health,
            message: format!("{} swings wide and misses {}.", player.name, monster.name),
        };
    }

    let damage = roll_damage(player.attack, monster.defense, rolls);
    monster.health = (monster.health - damage).max(0);

    AttackReport {
        hit: true,
        damage,
        target_health: monster.health,
        message: format!(
            "{} hits {} for {} damage.",
            player.name, monster.name, damage
        ),
    }
}

/// Resolve a monster attack against the player. Symmetric to
/// [`player_attacks`], applied to player health.
pub fn monster_attacks(
    monster: &Monster,
    player: &mut Player,
    rolls: &impl RollProvider,
) -> AttackReport {
    if !check_hit(monster.level, player.level, rolls) {
        return AttackReport {
            hit: false,
            damage: 0,
            target_health: player.health,
            message: format!("{} lunges at {} and misses.", monster.name, player.name),
        };
    }

    let damage = roll_damage(monster.attack, player.defense, rolls);
    player.health = (player.health - damage).max(0);

    AttackReport {
        hit: true,
        damage,
        target_health: player.health,
        message: format!(
            "{} strikes {} for {} damage.",
            monster.name, player.name, damage
        ),
    }
}

/// Brace for incoming attacks: a d20 of 10 or more adds half the roll to
/// defense.
///
/// The bonus persists for the remainder of the encounter. Whether it should
/// decay when the encounter ends is an open question inherited from the
/// original rules; it is deliberately not reset here.
pub fn player_defends(player: &mut Player, rolls: &impl RollProvider) -> DefendReport {
    let roll = rolls.roll(20);
    let bonus = if roll >= 10 { (roll / 2) as i32 } else { 0 };
    player.defense += bonus;

    DefendReport {
        roll,
        bonus,
        defense: player.defense,
    }
}

/// Drink a potion: a d20 of 18+ heals 1.5×, 3 or less heals 0.5×, anything
/// else heals the base amount. Health caps at max health.
pub fn player_heals(player: &mut Player, amount: i32, rolls: &impl RollProvider) -> HealReport {
    let roll = rolls.roll(20);
    let healed = if roll >= 18 {
        (f64::from(amount) * 1.5) as i32
    } else if roll <= 3 {
        (f64::from(amount) * 0.5) as i32
    } else {
        amount
    };

    let before = player.health;
    player.health = (player.health + healed).min(player.max_health);

    HealReport {
        roll,
        restored: player.health - before,
        health: player.health,
    }
}

/// Attempt to flee: succeeds iff `d20 + level / 5 >= 12`.
pub fn player_flees(player: &Player, rolls: &impl RollProvider) -> FleeReport {
    let roll = rolls.roll(20);
    let escaped = roll as i32 + player.level / 5 >= 12;
    FleeReport { roll, escaped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{MonsterId, MonsterKind, PlayerId};
    use crate::env::SequenceRolls;

    fn player() -> Player {
        Player::new(PlayerId(1), "ayla")
    }

    fn goblin() -> Monster {
        Monster {
            id: MonsterId(1),
            name: "Gribble".into(),
            level: 1,
            health: 40,
            attack: 7,
            defense: 1,
            kind: MonsterKind::Goblin,
        }
    }

    #[test]
    fn attack_hit_depletes_monster_health() {
        let player = player();
        let mut monster = goblin();
        // uniform 0.1 hits at 75%, then a mid d20 deals base damage
        let rolls = SequenceRolls::new([10], [0.1]);

        let report = player_attacks(&player, &mut monster, &rolls);

        assert!(report.hit);
        assert_eq!(report.damage, 10);
        assert_eq!(monster.health, 30);
        assert_eq!(report.target_health, 30);
    }

    #[test]
    fn attack_miss_leaves_monster_untouched() {
        let player = player();
        let mut monster = goblin();
        let rolls = SequenceRolls::new([], [0.9]);

        let report = player_attacks(&player, &mut monster, &rolls);

        assert!(!report.hit);
        assert_eq!(report.damage, 0);
        assert_eq!(monster.health, 40);
    }

    #[test]
    fn monster_health_floors_at_zero() {
        let mut player = player();
        player.attack = 200;
        let mut monster = goblin();
        let rolls = SequenceRolls::new([20], [0.0]);

        let report = player_attacks(&player, &mut monster, &rolls);

        assert_eq!(monster.health, 0);
        assert_eq!(report.target_health, 0);
        assert!(monster.is_defeated());
    }

    #[test]
    fn monster_attack_never_drops_player_below_zero() {
        let mut player = player();
        player.health = 3;
        let mut monster = goblin();
        monster.attack = 50;
        let rolls = SequenceRolls::new([20], [0.0]);

        monster_attacks(&monster, &mut player, &rolls);

        assert_eq!(player.health, 0);
        assert!(player.is_dead());
    }

    #[test]
    fn defend_grants_half_roll_from_ten_up() {
        let mut player = player();
        let report = player_defends(&mut player, &SequenceRolls::of_rolls([15]));
        assert_eq!(report.bonus, 7);
        assert_eq!(player.defense, 12);
    }

    #[test]
    fn defend_below_ten_grants_nothing() {
        let mut player = player();
        let report = player_defends(&mut player, &SequenceRolls::of_rolls([9]));
        assert_eq!(report.bonus, 0);
        assert_eq!(player.defense, 5);
    }

    #[test]
    fn heal_is_capped_at_max_health() {
        let mut player = player();
        player.health = 95;
        let report = player_heals(&mut player, 20, &SequenceRolls::of_rolls([10]));
        assert_eq!(report.restored, 5);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn heal_roll_modifies_amount() {
        let mut player = player();
        player.health = 10;
        let report = player_heals(&mut player, 20, &SequenceRolls::of_rolls([18]));
        assert_eq!(report.restored, 30);

        player.health = 10;
        let report = player_heals(&mut player, 20, &SequenceRolls::of_rolls([3]));
        assert_eq!(report.restored, 10);
    }

    #[test]
    fn attack_outcome_stays_in_bounds_for_every_roll() {
        for roll in 1..=20 {
            for hit in [0.0, 0.99] {
                let mut player = player();
                player.attack = 10;
                player.defense = 2;
                player.health = 50;
                let mut monster = goblin();
                monster.health = 40;

                let report =
                    player_attacks(&player, &mut monster, &SequenceRolls::new([roll], [hit]));

                assert!((0..=40).contains(&monster.health));
                assert_eq!(report.target_health, monster.health);
            }
        }
    }

    #[test]
    fn flee_threshold_includes_level_bonus() {
        let mut player = player();
        player.level = 10;
        // 10 + 10/5 = 12 escapes; 9 + 2 = 11 does not
        assert!(player_flees(&player, &SequenceRolls::of_rolls([10])).escaped);
        assert!(!player_flees(&player, &SequenceRolls::of_rolls([9])).escaped);
    }
}
