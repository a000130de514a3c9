//! Runtime orchestration for the dungeon-crawler engine.
//!
//! This crate wires the pure rules from `delve-core` to a persistence
//! boundary and exposes the request/response operations a transport layer
//! calls into. Consumers embed [`RunOrchestrator`] to drive turns and
//! manage sessions; repositories are trait objects so a database-backed
//! store can replace the in-memory ones without touching the rules.
//!
//! Modules are organized by responsibility:
//! - [`orchestrator`] resolves one player action per call
//! - [`session`] owns the session lifecycle and snapshot serialization
//! - [`score`] tracks high scores and completion history
//! - [`repository`] defines the persistence-boundary contracts
pub mod error;
pub mod orchestrator;
pub mod repository;
pub mod rolls;
pub mod score;
pub mod session;

pub use error::{EngineError, Result};
pub use orchestrator::{RunOrchestrator, TurnAction, TurnReport};
pub use repository::{
    ArtifactRepository, DungeonRepository, HighScoreRepository, HistoryRepository,
    InMemoryWorld, MonsterRepository, PlayerRepository, SessionRepository,
};
pub use rolls::ThreadRngRolls;
pub use score::{GameHistory, HighScore, HighScoreService, HistoryService};
pub use session::{Session, SessionService};
