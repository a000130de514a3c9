/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Heals a player may use inside a single room before the action is
    /// rejected. Resets when a new room is entered.
    pub max_heals_per_room: u32,
    /// Base healing amount per heal action, before the heal roll modifier.
    pub heal_amount: i32,
    /// Percent chance that a generated room holds a monster.
    pub monster_presence_percent: u32,
    /// Percent chance that a generated dungeon holds an artifact.
    pub artifact_presence_percent: u32,
    /// Gold found when searching a room is drawn from
    /// `[search_gold_min, search_gold_max]` and multiplied by player level.
    pub search_gold_min: u32,
    pub search_gold_max: u32,
    /// Score granted per cleared room, scaled by difficulty ordinal + 1.
    pub room_score_base: i64,
    /// Score granted on dungeon completion, scaled by difficulty ordinal + 1.
    pub dungeon_bonus_base: i64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALS_PER_ROOM: u32 = 2;
    pub const DEFAULT_HEAL_AMOUNT: i32 = 20;
    pub const DEFAULT_MONSTER_PRESENCE_PERCENT: u32 = 80;
    pub const DEFAULT_ARTIFACT_PRESENCE_PERCENT: u32 = 50;
    pub const DEFAULT_SEARCH_GOLD_MIN: u32 = 10;
    pub const DEFAULT_SEARCH_GOLD_MAX: u32 = 49;
    pub const DEFAULT_ROOM_SCORE_BASE: i64 = 100;
    pub const DEFAULT_DUNGEON_BONUS_BASE: i64 = 500;

    pub fn new() -> Self {
        Self {
            max_heals_per_room: Self::DEFAULT_MAX_HEALS_PER_ROOM,
            heal_amount: Self::DEFAULT_HEAL_AMOUNT,
            monster_presence_percent: Self::DEFAULT_MONSTER_PRESENCE_PERCENT,
            artifact_presence_percent: Self::DEFAULT_ARTIFACT_PRESENCE_PERCENT,
            search_gold_min: Self::DEFAULT_SEARCH_GOLD_MIN,
            search_gold_max: Self::DEFAULT_SEARCH_GOLD_MAX,
            room_score_base: Self::DEFAULT_ROOM_SCORE_BASE,
            dungeon_bonus_base: Self::DEFAULT_DUNGEON_BONUS_BASE,
        }
    }

    pub fn with_max_heals_per_room(mut self, max_heals_per_room: u32) -> Self {
        self.max_heals_per_room = max_heals_per_room;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
