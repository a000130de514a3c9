//! Per-turn orchestration: player acts, world reacts, progression applies,
//! state persists.
//!
//! [`RunOrchestrator`] composes the combat resolver, the entity factories,
//! the progression engine, and the session state machine into one
//! read/mutate/persist round trip per call. It assumes at most one in-flight
//! turn per session; the only cross-request guarantee is the
//! at-most-one-active-session-per-player invariant enforced on start.

use std::sync::Arc;

use tracing::{debug, info};

use delve_core::combat::{
    monster_attacks, player_attacks, player_defends, player_flees, player_heals, resolve_defeat,
    resolve_victory,
};
use delve_core::entity::{Difficulty, Dungeon, Player, PlayerId, SessionId};
use delve_core::env::{ContentOracle, RollProvider};
use delve_core::session::RunSnapshot;
use delve_core::{GameConfig, generate_dungeon, progression};

use delve_content::Catalog;

use crate::error::{EngineError, Result};
use crate::repository::{
    DungeonRepository, HighScoreRepository, HistoryRepository, InMemoryWorld, PlayerRepository,
    SessionRepository,
};
use crate::rolls::ThreadRngRolls;
use crate::score::{HighScoreService, HistoryService};
use crate::session::{Session, SessionService};

/// One player-chosen action per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Fight,
    Defend,
    Heal,
    Flee,
    Search,
    /// Move to the next room; past the last room this completes the dungeon.
    Advance,
}

/// What a turn did, for the transport layer to render.
#[derive(Clone, Debug, Default)]
pub struct TurnReport {
    pub messages: Vec<String>,
    pub score: i64,
    pub monster_defeated: bool,
    pub room_completed: bool,
    /// The session ended this turn, by completion or by death.
    pub run_over: bool,
    pub player_died: bool,
}

/// Composes the rules, factories, and services behind the request/response
/// surface the transport layer calls into.
pub struct RunOrchestrator<R = ThreadRngRolls, C = Catalog>
where
    R: RollProvider,
    C: ContentOracle,
{
    config: GameConfig,
    rolls: R,
    catalog: C,
    players: Arc<dyn PlayerRepository>,
    dungeons: Arc<dyn DungeonRepository>,
    sessions: SessionService,
    high_scores: HighScoreService,
    history: HistoryService,
}

impl RunOrchestrator<ThreadRngRolls, Catalog> {
    /// An orchestrator over fresh in-memory stores, OS-seeded rolls, and
    /// the built-in catalog. The returned [`InMemoryWorld`] shares the
    /// stores for direct inspection.
    pub fn in_memory(config: GameConfig) -> (Self, InMemoryWorld) {
        let world = InMemoryWorld::new();
        let orchestrator = Self::new(
            config,
            ThreadRngRolls,
            Catalog::builtin(),
            world.players.clone(),
            world.dungeons.clone(),
            world.sessions.clone(),
            world.high_scores.clone(),
            world.histories.clone(),
        );
        (orchestrator, world)
    }
}

impl<R: RollProvider, C: ContentOracle> RunOrchestrator<R, C> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: GameConfig,
        rolls: R,
        catalog: C,
        players: Arc<dyn PlayerRepository>,
        dungeons: Arc<dyn DungeonRepository>,
        sessions: Arc<dyn SessionRepository>,
        high_scores: Arc<dyn HighScoreRepository>,
        histories: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            config,
            rolls,
            catalog,
            players,
            dungeons,
            sessions: SessionService::new(sessions),
            high_scores: HighScoreService::new(high_scores),
            history: HistoryService::new(histories),
        }
    }

    pub fn sessions(&self) -> &SessionService {
        &self.sessions
    }

    pub fn high_scores(&self) -> &HighScoreService {
        &self.high_scores
    }

    pub fn history(&self) -> &HistoryService {
        &self.history
    }

    /// Create and persist a new player character.
    pub async fn create_player(&self, name: impl Into<String>) -> Result<Player> {
        self.players
            .create(Player::new(Default::default(), name))
            .await
    }

    /// Generate a dungeon scaled to the player and start a session in it.
    pub async fn begin_run(
        &self,
        player_id: PlayerId,
        room_count: usize,
        difficulty: Difficulty,
    ) -> Result<(Session, Dungeon)> {
        let player = self.require_player(player_id).await?;

        let dungeon = generate_dungeon(
            room_count,
            player.level,
            &self.config,
            &self.rolls,
            &self.catalog,
        )?;
        let dungeon = self.dungeons.create(dungeon).await?;

        let session = self.sessions.start(player_id, &dungeon, difficulty).await?;
        info!(
            player = %player_id,
            dungeon = %dungeon.id,
            rooms = dungeon.rooms.len(),
            %difficulty,
            "run started"
        );
        Ok((session, dungeon))
    }

    /// Checkpoint the session as paused.
    pub async fn pause(&self, session_id: SessionId) -> Result<Session> {
        let session = self.sessions.find(session_id).await?;
        let snapshot = session.snapshot()?;
        self.sessions.save(session_id, &snapshot, true).await
    }

    /// Resume a paused session. A snapshot that fails to decode surfaces
    /// as [`EngineError::Snapshot`]; callers fall back to a new run.
    pub async fn resume(&self, session_id: SessionId) -> Result<(Session, RunSnapshot)> {
        self.sessions.resume(session_id).await
    }

    /// End the session regardless of its progress.
    pub async fn end_run(&self, session_id: SessionId) -> Result<Session> {
        self.sessions.end(session_id).await
    }

    /// Resolve one player-chosen action for an active, unpaused session.
    pub async fn take_turn(&self, session_id: SessionId, action: TurnAction) -> Result<TurnReport> {
        let session = self.sessions.find(session_id).await?;
        if !session.is_active {
            return Err(EngineError::invalid_state("session has ended"));
        }
        if session.is_paused {
            return Err(EngineError::invalid_state(
                "session is paused; resume before acting",
            ));
        }

        let mut snapshot = session.snapshot()?;
        let mut player = self.require_player(session.player_id).await?;
        let mut dungeon = self
            .dungeons
            .find(session.dungeon_id)
            .await?
            .ok_or_else(|| EngineError::not_found("dungeon", session.dungeon_id))?;

        if snapshot.current_room_index >= dungeon.rooms.len() {
            return Err(EngineError::invalid_state("room pointer out of range"));
        }

        debug!(session = %session_id, ?action, room = snapshot.current_room_index, "turn");

        let mut report = TurnReport::default();
        match action {
            TurnAction::Fight => self.fight(&mut player, &mut dungeon, &mut snapshot, &mut report)?,
            TurnAction::Defend => self.defend(&mut player, &mut report),
            TurnAction::Heal => self.heal(&mut player, &mut snapshot, &mut report)?,
            TurnAction::Flee => self.flee(&mut player, &mut dungeon, &mut snapshot, &mut report)?,
            TurnAction::Search => self.search(&mut player, &dungeon, &mut snapshot, &mut report)?,
            TurnAction::Advance => {
                self.advance(&mut player, &mut dungeon, &mut snapshot, &mut report)
                    .await?
            }
        }

        if player.is_dead() {
            self.game_over(&mut player, &dungeon, &snapshot, &mut report);
        }

        if report.run_over {
            player.high_score = player.high_score.max(snapshot.score);
            self.high_scores
                .submit(player.id, snapshot.score)
                .await?;
        }

        self.players.save(&player).await?;
        self.dungeons.save(&dungeon).await?;
        self.sessions.save(session_id, &snapshot, false).await?;
        if report.run_over {
            self.sessions.end(session_id).await?;
        }

        report.score = snapshot.score;
        report.monster_defeated = snapshot.is_monster_defeated;
        report.room_completed = snapshot.is_room_completed;
        Ok(report)
    }

    /// Add gold to a player outside any run.
    pub async fn grant_gold(&self, player_id: PlayerId, amount: i64) -> Result<i64> {
        let mut player = self.require_player(player_id).await?;
        progression::add_gold(&mut player, amount);
        self.players.save(&player).await?;
        Ok(player.gold)
    }

    /// Deduct gold, failing without mutation when the balance is short.
    pub async fn spend_gold(&self, player_id: PlayerId, amount: i64) -> Result<i64> {
        let mut player = self.require_player(player_id).await?;
        if !progression::remove_gold(&mut player, amount) {
            return Err(EngineError::InsufficientGold {
                requested: amount,
                available: player.gold,
            });
        }
        self.players.save(&player).await?;
        Ok(player.gold)
    }

    /// Grant experience directly, resolving level-ups.
    pub async fn grant_experience(&self, player_id: PlayerId, points: i32) -> Result<u32> {
        let mut player = self.require_player(player_id).await?;
        let level_ups = progression::add_experience(&mut player, points);
        self.players.save(&player).await?;
        Ok(level_ups)
    }

    async fn require_player(&self, player_id: PlayerId) -> Result<Player> {
        self.players
            .find(player_id)
            .await?
            .ok_or_else(|| EngineError::not_found("player", player_id))
    }

    fn fight(
        &self,
        player: &mut Player,
        dungeon: &mut Dungeon,
        snapshot: &mut RunSnapshot,
        report: &mut TurnReport,
    ) -> Result<()> {
        let room = &mut dungeon.rooms[snapshot.current_room_index];
        let Some(monster) = room.monster.as_mut() else {
            return Err(EngineError::invalid_state("there is no monster to fight"));
        };
        if snapshot.is_monster_defeated || monster.is_defeated() {
            return Err(EngineError::invalid_state(
                "the monster is already defeated",
            ));
        }

        let attack = player_attacks(player, monster, &self.rolls);
        let monster_name = monster.name.clone();
        let defeated = attack.hit && monster.is_defeated();
        report.messages.push(attack.message);

        if defeated {
            snapshot.is_monster_defeated = true;
            snapshot.score += snapshot.room_score(&self.config);

            let victory = resolve_victory(player, room, &self.rolls);
            report.messages.push(format!(
                "You defeated {}! +{} experience, +{} gold",
                monster_name, victory.experience, victory.gold
            ));
            if victory.level_ups > 0 {
                report.messages.push(format!(
                    "You feel stronger. Welcome to level {}!",
                    player.level
                ));
            }
            return Ok(());
        }

        // The monster answers a miss or a survivable hit in kind.
        if let Some(monster) = room.monster.as_ref() {
            let counter = monster_attacks(monster, player, &self.rolls);
            report.messages.push(counter.message);
        }
        Ok(())
    }

    fn defend(&self, player: &mut Player, report: &mut TurnReport) {
        let defend = player_defends(player, &self.rolls);
        report.messages.push(if defend.bonus > 0 {
            format!(
                "You brace behind your guard. Defense up by {} (now {}).",
                defend.bonus, defend.defense
            )
        } else {
            "You fumble for footing and gain no ground.".to_string()
        });
    }

    fn heal(
        &self,
        player: &mut Player,
        snapshot: &mut RunSnapshot,
        report: &mut TurnReport,
    ) -> Result<()> {
        if !snapshot.heal_available(&self.config) {
            return Err(EngineError::invalid_state(
                "no healing potions left for this room",
            ));
        }

        snapshot.heals_used_in_room += 1;
        let heal = player_heals(player, self.config.heal_amount, &self.rolls);
        report.messages.push(format!(
            "You drink a healing potion. +{} HP ({}/{}).",
            heal.restored, player.health, player.max_health
        ));
        Ok(())
    }

    fn flee(
        &self,
        player: &mut Player,
        dungeon: &mut Dungeon,
        snapshot: &mut RunSnapshot,
        report: &mut TurnReport,
    ) -> Result<()> {
        let room = &dungeon.rooms[snapshot.current_room_index];
        if !room.has_live_monster() || snapshot.is_monster_defeated {
            return Err(EngineError::invalid_state("there is nothing to flee from"));
        }

        let flee = player_flees(player, &self.rolls);
        if flee.escaped {
            // Escaping forfeits the room's rewards but closes the encounter.
            snapshot.is_monster_defeated = true;
            snapshot.is_room_completed = true;
            report.messages.push("You slip away from the fight.".into());
            return Ok(());
        }

        report
            .messages
            .push("You fail to escape! The monster catches you.".into());
        if let Some(monster) = room.monster.as_ref() {
            let counter = monster_attacks(monster, player, &self.rolls);
            report.messages.push(counter.message);
        }
        Ok(())
    }

    fn search(
        &self,
        player: &mut Player,
        dungeon: &Dungeon,
        snapshot: &mut RunSnapshot,
        report: &mut TurnReport,
    ) -> Result<()> {
        let room = &dungeon.rooms[snapshot.current_room_index];
        if room.has_live_monster() && !snapshot.is_monster_defeated {
            return Err(EngineError::invalid_state(
                "a monster still prowls this room",
            ));
        }
        if snapshot.is_room_completed {
            return Err(EngineError::invalid_state(
                "this room has already been picked clean",
            ));
        }

        let gold = i64::from(
            self.rolls
                .range(self.config.search_gold_min, self.config.search_gold_max),
        ) * i64::from(player.level.max(1));
        progression::add_gold(player, gold);
        snapshot.score += snapshot.room_score(&self.config) / 2;
        snapshot.is_room_completed = true;

        report
            .messages
            .push(format!("You search the room and find {} gold pieces!", gold));
        Ok(())
    }

    async fn advance(
        &self,
        player: &mut Player,
        dungeon: &mut Dungeon,
        snapshot: &mut RunSnapshot,
        report: &mut TurnReport,
    ) -> Result<()> {
        if !snapshot.is_room_completed {
            return Err(EngineError::invalid_state(
                "finish this room before moving on",
            ));
        }

        if snapshot.at_last_room() {
            let bonus = snapshot.completion_bonus(&self.config);
            snapshot.score += bonus;
            dungeon.mark_explored();

            if let Some(artifact) = dungeon.artifact.take() {
                report
                    .messages
                    .push(format!("You claim the {} ({})!", artifact.name, artifact.rarity));
                progression::grab_artifact(player, artifact);
            }

            self.history.record_completion(player.id, dungeon.id).await?;
            report.run_over = true;
            report.messages.push(format!(
                "You conquered {}! Completion bonus +{} points.",
                dungeon.name, bonus
            ));
            info!(player = %player.id, dungeon = %dungeon.id, score = snapshot.score, "dungeon completed");
            return Ok(());
        }

        let next = snapshot.current_room_index + 1;
        snapshot.enter_room(next);
        let room = &dungeon.rooms[next];
        report
            .messages
            .push(format!("You enter {}. {}", room.name, room.description));
        Ok(())
    }

    fn game_over(
        &self,
        player: &mut Player,
        dungeon: &Dungeon,
        snapshot: &RunSnapshot,
        report: &mut TurnReport,
    ) {
        let room = &dungeon.rooms[snapshot.current_room_index];
        let defeat = resolve_defeat(player, room);
        report.player_died = true;
        report.run_over = true;
        report.messages.push(format!(
            "You fall in battle, losing {} gold. You wake outside with {} HP.",
            defeat.gold_lost, defeat.health_restored
        ));
        info!(player = %player.id, score = snapshot.score, "run ended in defeat");
    }
}
