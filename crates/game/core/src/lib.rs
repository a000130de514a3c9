//! Deterministic game rules shared across the runtime and offline tools.
//!
//! `delve-core` defines the canonical combat, progression, and generation
//! rules for the dungeon crawler and exposes pure APIs over injected
//! randomness and content oracles. All probabilistic behavior flows through
//! [`env::RollProvider`], so every rule is testable with fixed roll
//! sequences.
pub mod combat;
pub mod config;
pub mod entity;
pub mod env;
pub mod generate;
pub mod progression;
pub mod session;

pub use combat::{
    AttackReport, DefeatReport, DefendReport, FleeReport, HealReport, VictoryReport, hit_chance,
    monster_attacks, player_attacks, player_defends, player_flees, player_heals, resolve_defeat,
    resolve_victory, roll_damage,
};
pub use config::GameConfig;
pub use entity::{
    Admin, Artifact, ArtifactId, Difficulty, Dungeon, DungeonId, Monster, MonsterId, MonsterKind,
    Player, PlayerAction, PlayerId, Rarity, Room, RoomId, SessionId, User, UserId, UserKind,
};
pub use env::{ContentOracle, PcgRolls, RollProvider, SequenceRolls, Template};
pub use generate::{GenerateError, generate_dungeon, generate_monster, generate_room};
pub use session::RunSnapshot;
