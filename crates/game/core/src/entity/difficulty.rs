//! Difficulty bands and the scaling tables keyed on them.

use strum::{Display, EnumIter};

/// Difficulty band driving scaling multipliers throughout generation,
/// rewards, and defeat penalties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Zero-based ordinal, used for score scaling.
    pub fn ordinal(self) -> i64 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Extreme => 3,
        }
    }

    /// Multiplier applied to a room's base rewards on combat victory.
    pub fn reward_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.25,
            Difficulty::Hard => 1.5,
            Difficulty::Extreme => 2.0,
        }
    }

    /// Multiplier applied to reward baselines at room generation time.
    pub fn generation_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
            Difficulty::Extreme => 3.0,
        }
    }

    /// Fraction of carried gold lost on combat defeat.
    pub fn gold_loss_rate(self) -> f64 {
        match self {
            Difficulty::Easy => 0.05,
            Difficulty::Medium => 0.10,
            Difficulty::Hard => 0.15,
            Difficulty::Extreme => 0.25,
        }
    }

    /// Fraction of max health restored after a combat defeat.
    pub fn health_restore_rate(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 0.3,
            Difficulty::Hard => 0.2,
            Difficulty::Extreme => 0.1,
        }
    }

    /// Inclusive range added to the target level when generating a monster.
    pub fn level_variation(self) -> (i32, i32) {
        match self {
            Difficulty::Easy => (-2, 0),
            Difficulty::Medium => (-1, 1),
            Difficulty::Hard => (0, 2),
            Difficulty::Extreme => (1, 4),
        }
    }

    /// Difficulty of the room at `index` within a dungeon of `room_count`
    /// rooms. Bands are fixed by position: the first 30% of rooms are Easy,
    /// the next 30% Medium, the next 25% Hard, and the remainder Extreme.
    pub fn for_room_index(index: usize, room_count: usize) -> Self {
        let position = index as f64;
        let count = room_count as f64;
        if position < count * 0.3 {
            Difficulty::Easy
        } else if position < count * 0.6 {
            Difficulty::Medium
        } else if position < count * 0.85 {
            Difficulty::Hard
        } else {
            Difficulty::Extreme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_room_dungeon_bands_by_position() {
        let bands: Vec<_> = (0..10).map(|i| Difficulty::for_room_index(i, 10)).collect();
        assert_eq!(
            bands,
            vec![
                Difficulty::Easy,
                Difficulty::Easy,
                Difficulty::Easy,
                Difficulty::Medium,
                Difficulty::Medium,
                Difficulty::Medium,
                Difficulty::Hard,
                Difficulty::Hard,
                Difficulty::Hard,
                Difficulty::Extreme,
            ]
        );
    }

    #[test]
    fn single_room_dungeon_is_extreme_free() {
        assert_eq!(Difficulty::for_room_index(0, 1), Difficulty::Easy);
    }
}
