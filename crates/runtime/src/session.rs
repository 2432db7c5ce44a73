//! Synchronous game session wrapping the deterministic core.

use delve_core::{
    BattleLog, Direction, GameConfig, GamePhase, GameState, MonsterState, PlayerStatus, Position,
    StepOutcome, exp_for_next_level, step,
};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};

/// A single playthrough owned by the embedder.
///
/// The session holds the only live [`GameState`] in flight, funnels every
/// directional input through [`delve_core::step`], and exposes the
/// read-only projections a frontend renders from. Identical configurations
/// and input sequences replay identically.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    seed: u64,
}

impl GameSession {
    /// Starts a new game on floor 1.
    ///
    /// Draws a seed from OS entropy when the configuration does not fix one.
    pub fn new(config: SessionConfig) -> Result<Self> {
        if !config.is_playable() {
            return Err(SessionError::MapTooSmall {
                width: config.map_width,
                height: config.map_height,
            });
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let state = GameState::new_game(
            GameConfig::with_map_size(config.map_width, config.map_height),
            seed,
        );
        info!(
            target: "runtime::session",
            seed,
            width = config.map_width,
            height = config.map_height,
            "Session started"
        );

        Ok(Self { state, seed })
    }

    /// Applies one directional input and reports what it did.
    pub fn move_player(&mut self, direction: Direction) -> StepOutcome {
        let outcome = step(&mut self.state, direction);

        match outcome {
            StepOutcome::Descended { floor } => {
                info!(target: "runtime::session", floor, "Descended the stairs");
            }
            StepOutcome::Fought {
                target,
                defeated,
                player_died,
                leveled_up,
            } => {
                debug!(
                    target: "runtime::session",
                    monster = %target,
                    defeated,
                    player_died,
                    leveled_up,
                    "Melee resolved"
                );
            }
            _ => {
                debug!(target: "runtime::session", %direction, ?outcome, "Turn resolved");
            }
        }
        if self.state.phase.is_terminal() && outcome != StepOutcome::Ignored {
            info!(target: "runtime::session", phase = %self.state.phase, "Session finished");
        }

        outcome
    }

    /// The full current snapshot, for persistence or headless inspection.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The seed this run was built from; fixing it replays the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn floor(&self) -> u32 {
        self.state.floor
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn player(&self) -> &PlayerStatus {
        &self.state.player
    }

    pub fn player_position(&self) -> Position {
        self.state.player_position
    }

    /// Monsters a frontend should draw: spotted and alive.
    pub fn visible_monsters(&self) -> impl Iterator<Item = &MonsterState> {
        self.state.visible_monsters()
    }

    /// Chronological battle log; presentation decides the display order.
    pub fn battle_log(&self) -> &BattleLog {
        &self.state.log
    }

    /// Experience required for the player's next level, for progress bars.
    pub fn exp_to_next_level(&self) -> u32 {
        exp_for_next_level(self.state.player.level)
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::state_digest;

    fn fixed(width: u32, height: u32, seed: u64) -> SessionConfig {
        SessionConfig {
            map_width: width,
            map_height: height,
            seed: Some(seed),
        }
    }

    #[test]
    fn rejects_an_unplayable_map() {
        let err = GameSession::new(fixed(8, 6, 1)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::MapTooSmall {
                width: 8,
                height: 6
            }
        ));
        assert!(err.to_string().contains("playable minimum"));
    }

    #[test]
    fn starts_on_floor_one_at_the_entry() {
        let session = GameSession::new(fixed(40, 24, 7)).unwrap();
        assert_eq!(session.floor(), 1);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert!(!session.is_finished());
        assert!(session.state().grid.is_walkable(session.player_position()));
        assert_eq!(session.seed(), 7);
    }

    #[test]
    fn fixed_seeds_replay_identically() {
        let inputs = [
            Direction::East,
            Direction::South,
            Direction::South,
            Direction::West,
            Direction::NorthEast,
            Direction::North,
        ];

        let mut a = GameSession::new(fixed(40, 24, 99)).unwrap();
        let mut b = GameSession::new(fixed(40, 24, 99)).unwrap();
        for direction in inputs {
            assert_eq!(a.move_player(direction), b.move_player(direction));
        }
        assert_eq!(state_digest(a.state()), state_digest(b.state()));
    }

    #[test]
    fn exp_requirement_tracks_player_level() {
        let session = GameSession::new(fixed(40, 24, 3)).unwrap();
        assert_eq!(session.player().level, 1);
        assert_eq!(session.exp_to_next_level(), 5);
    }
}
