//! Damage calculation.

use crate::env::RollProvider;

/// Roll damage for a connecting attack.
///
/// # Formula
///
/// ```text
/// base = attack − defense / 2
/// roll d20:
///   20      → 2 × base   (critical)
///   1       → 0          (fumble)
///   15..=19 → 1.5 × base
///   2..=5   → 0.5 × base
///   else    → max(base, 1)
/// ```
///
/// Multiplications truncate toward zero and the result is clamped at 0, so
/// an attack can never heal a heavily armoured defender.
pub fn roll_damage(attack: i32, defense: i32, rolls: &impl RollProvider) -> i32 {
    let roll = rolls.roll(20);
    let base = attack - defense / 2;

    let damage = match roll {
        20 => base * 2,
        1 => 0,
        15..=19 => (f64::from(base) * 1.5) as i32,
        2..=5 => (f64::from(base) * 0.5) as i32,
        _ => base.max(1),
    };

    damage.max(0)
}
