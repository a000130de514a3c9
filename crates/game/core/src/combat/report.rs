//! Reports returned by combat resolution.

/// Result of one attack attempt, from either side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// Whether the attack connected.
    pub hit: bool,
    /// Damage dealt; 0 on a miss or a fumble.
    pub damage: i32,
    /// Defender health after the attack, floored at 0.
    pub target_health: i32,
    /// Human-readable narration for the transport layer.
    pub message: String,
}

/// Result of a defend action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefendReport {
    pub roll: u32,
    /// Defense gained; 0 when the roll fell below the threshold.
    pub bonus: i32,
    pub defense: i32,
}

/// Result of a heal action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealReport {
    pub roll: u32,
    /// Health actually restored after the max-health cap.
    pub restored: i32,
    pub health: i32,
}

/// Result of a flee attempt. Carries no state mutation; the caller marks
/// room and monster state on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleeReport {
    pub roll: u32,
    pub escaped: bool,
}

/// Rewards applied after a combat victory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryReport {
    pub experience: i32,
    pub gold: i64,
    /// Whether the flat +0.2 bonus multiplier applied.
    pub lucky: bool,
    pub level_ups: u32,
}

/// Penalties applied after a combat defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefeatReport {
    pub gold_lost: i64,
    /// Health the player wakes up with.
    pub health_restored: i32,
}
