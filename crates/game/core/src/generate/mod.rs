//! Entity factories: procedural generation of monsters, rooms, dungeons,
//! and artifacts.
//!
//! Factories draw all randomness from the injected [`crate::env::RollProvider`]
//! and all flavor text from the [`crate::env::ContentOracle`], so generation
//! is fully scriptable in tests. Generated entities carry unassigned ids;
//! the persistence boundary assigns identity on first save.

mod artifact;
mod dungeon;
mod monster;
mod room;

pub use artifact::{draw_rarity, generate_artifact};
pub use dungeon::generate_dungeon;
pub use monster::generate_monster;
pub use room::generate_room;

/// Failures surfaced by the factories.
///
/// Generation is infallible apart from content lookups: an empty flavor
/// pool means the catalog is misconfigured, and the error names the pool so
/// the operator can fix the data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("content pool '{0}' is empty")]
    EmptyPool(&'static str),
}

/// Uniform pick from a pool, or the named error when the pool is empty.
pub(crate) fn pick<'a, T>(
    pool: &'a [T],
    pool_name: &'static str,
    rolls: &impl crate::env::RollProvider,
) -> Result<&'a T, GenerateError> {
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool(pool_name));
    }
    let index = rolls.roll(pool.len() as u32) as usize - 1;
    Ok(&pool[index])
}

/// Jitter a base stat by ±10%, inclusive at both ends.
pub(crate) fn jitter(base: i32, rolls: &impl crate::env::RollProvider) -> i32 {
    let spread = base / 10;
    if spread <= 0 {
        return base;
    }
    let span = (2 * spread + 1) as u32;
    base - spread + rolls.roll(span) as i32 - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRolls;

    #[test]
    fn jitter_spans_plus_minus_ten_percent() {
        let low = jitter(100, &SequenceRolls::of_rolls([1]));
        let high = jitter(100, &SequenceRolls::of_rolls([21]));
        assert_eq!(low, 90);
        assert_eq!(high, 110);
    }

    #[test]
    fn jitter_leaves_tiny_bases_untouched() {
        assert_eq!(jitter(5, &SequenceRolls::of_rolls([])), 5);
    }

    #[test]
    fn pick_reports_the_empty_pool_by_name() {
        let pool: [String; 0] = [];
        let err = pick(&pool, "monster names", &SequenceRolls::of_rolls([])).unwrap_err();
        assert_eq!(err, GenerateError::EmptyPool("monster names"));
    }
}
