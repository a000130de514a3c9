//! Progression engine: experience, leveling, gold, and inventory.

use crate::entity::{Artifact, ArtifactId, Player};

/// Accumulate experience and resolve any level-ups.
///
/// While `experience >= level_cap`: the cap is subtracted, level rises by
/// one, the cap grows by 100, max health by 10 (with a full heal), attack
/// by 2, and defense by 1. A single large grant can carry multiple levels.
/// Afterwards `0 <= experience < level_cap` holds.
///
/// The end state depends only on the total points granted, so replaying a
/// delta split across calls lands in the same place.
pub fn add_experience(player: &mut Player, points: i32) -> u32 {
    player.experience += points;

    let mut level_ups = 0;
    while player.experience >= player.level_cap {
        player.experience -= player.level_cap;
        player.level += 1;
        player.level_cap += 100;

        player.max_health += 10;
        player.health = player.max_health;
        player.attack += 2;
        player.defense += 1;
        level_ups += 1;
    }

    level_ups
}

pub fn add_gold(player: &mut Player, amount: i64) {
    player.gold += amount;
}

/// Deduct gold; returns false and leaves the balance untouched when the
/// player cannot afford `amount`.
pub fn remove_gold(player: &mut Player, amount: i64) -> bool {
    if amount > player.gold {
        return false;
    }
    player.gold -= amount;
    true
}

pub fn grab_artifact(player: &mut Player, artifact: Artifact) {
    player.inventory.push(artifact);
}

/// Remove an artifact by identity; a no-op failure when it is not held.
pub fn drop_artifact(player: &mut Player, artifact_id: ArtifactId) -> bool {
    let Some(index) = player.inventory.iter().position(|a| a.id == artifact_id) else {
        return false;
    };
    player.inventory.remove(index);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{PlayerId, Rarity};

    fn player() -> Player {
        Player::new(PlayerId(1), "ayla")
    }

    #[test]
    fn level_up_applies_stat_growth_and_full_heal() {
        let mut p = player();
        p.health = 40;

        let ups = add_experience(&mut p, 120);

        assert_eq!(ups, 1);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 20);
        assert_eq!(p.level_cap, 200);
        assert_eq!(p.max_health, 110);
        assert_eq!(p.health, 110);
        assert_eq!(p.attack, 12);
        assert_eq!(p.defense, 6);
    }

    #[test]
    fn one_grant_can_carry_multiple_levels() {
        let mut p = player();

        // 100 + 200 = 300 consumed, 50 left toward the 300 cap
        let ups = add_experience(&mut p, 350);

        assert_eq!(ups, 2);
        assert_eq!(p.level, 3);
        assert_eq!(p.experience, 50);
        assert_eq!(p.level_cap, 300);
    }

    #[test]
    fn split_grants_match_a_single_grant() {
        let mut once = player();
        add_experience(&mut once, 150);

        let mut split = player();
        add_experience(&mut split, 90);
        add_experience(&mut split, 60);

        assert_eq!(once, split);
        assert!(once.experience >= 0 && once.experience < once.level_cap);
    }

    #[test]
    fn remove_gold_fails_without_mutation_when_short() {
        let mut p = player();
        p.gold = 50;

        assert!(!remove_gold(&mut p, 100));
        assert_eq!(p.gold, 50);
        assert!(remove_gold(&mut p, 50));
        assert_eq!(p.gold, 0);
    }

    #[test]
    fn drop_artifact_is_a_noop_when_absent() {
        let mut p = player();
        grab_artifact(
            &mut p,
            Artifact {
                id: ArtifactId(7),
                name: "Rusty Sword".into(),
                description: String::new(),
                rarity: Rarity::Common,
            },
        );

        assert!(!drop_artifact(&mut p, ArtifactId(9)));
        assert_eq!(p.inventory.len(), 1);
        assert!(drop_artifact(&mut p, ArtifactId(7)));
        assert!(p.inventory.is_empty());
    }
}
