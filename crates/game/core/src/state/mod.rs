//! Authoritative game state representation.
//!
//! This module owns the data structures that describe one run: the floor
//! terrain, rooms, monsters, player status, and battle log. Embedding layers
//! clone or query this state but mutate it exclusively through the engine.
mod entities;
mod log;
mod tiles;

pub use bounded_vector::BoundedVec;
pub use entities::{
    Liveness, Meter, MonsterId, MonsterKind, MonsterProfile, MonsterState, PlayerStatus,
};
pub use log::{BattleLog, LogEntry};
pub use tiles::{Position, Room, Tile, TileGrid, TileKind};

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::rng::{CONTEXT_SPAWN, Pcg32, event_seed};
use crate::{mapgen, visibility};

/// Simulation state machine. Both end states are terminal: once reached,
/// every entry point becomes a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
    GameClear,
}

impl GamePhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::GameClear)
    }
}

/// Canonical snapshot of one run of the simulation.
///
/// The grid, room list, and monster population belong to the current floor
/// and are rebuilt wholesale on every stairs transition; only the player's
/// status and the run bookkeeping (seed, nonce, floor, phase) carry across.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Simulation parameters fixed at game start.
    pub config: GameConfig,

    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified. Combined with the
    /// floor number and `nonce` to derive unique seeds for each random event.
    pub seed: u64,

    /// Step counter feeding the per-event RNG streams. Increments once per
    /// state-changing step; no-op inputs leave it untouched.
    pub(crate) nonce: u64,

    /// Current depth, starting at 1.
    pub floor: u32,
    pub phase: GamePhase,

    pub player_position: Position,
    pub player: PlayerStatus,

    pub grid: TileGrid,
    /// Accepted rooms in acceptance order; the first is the entry room, the
    /// last holds the stairs.
    pub rooms: ArrayVec<Room, { GameConfig::MAX_ROOMS }>,
    pub monsters: BoundedVec<MonsterState, 0, { GameConfig::MAX_MONSTERS }>,
    pub log: BattleLog,
}

impl GameState {
    /// Builds floor 1 of a fresh run.
    pub fn new_game(config: GameConfig, seed: u64) -> Self {
        Self::floor_state(config, seed, 0, 1, PlayerStatus::starting())
    }

    /// Builds the state for one floor: terrain, spawns, entry position, and
    /// the initial reveal of the entry room.
    fn floor_state(
        config: GameConfig,
        seed: u64,
        nonce: u64,
        floor: u32,
        player: PlayerStatus,
    ) -> Self {
        let (mut grid, rooms) = mapgen::generate(&config, seed, floor);

        let mut spawn_rng = Pcg32::new(event_seed(seed, floor, 0, CONTEXT_SPAWN));
        let mut monsters = mapgen::spawn_monsters(&rooms, floor, &mut spawn_rng);

        let player_position = match rooms.first() {
            Some(entry) => {
                visibility::reveal_room(&mut grid, entry, &mut monsters);
                entry.center()
            }
            None => {
                visibility::reveal_around(&mut grid, mapgen::FALLBACK_POSITION);
                mapgen::FALLBACK_POSITION
            }
        };

        Self {
            config,
            seed,
            nonce,
            floor,
            phase: GamePhase::Playing,
            player_position,
            player,
            grid,
            rooms,
            monsters,
            log: BattleLog::new(),
        }
    }

    /// Rebuilds this state one floor deeper, carrying the player's status
    /// forward and clearing the battle log. Descending past
    /// [`GameConfig::FINAL_FLOOR`] wins the game.
    pub(crate) fn advance_floor(&mut self) {
        let next = self.floor + 1;
        *self = Self::floor_state(self.config.clone(), self.seed, self.nonce, next, self.player);
        if next > GameConfig::FINAL_FLOOR {
            self.phase = GamePhase::GameClear;
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[inline]
    pub fn is_game_clear(&self) -> bool {
        self.phase == GamePhase::GameClear
    }

    /// Monsters the embedder should render: spotted and still alive.
    pub fn visible_monsters(&self) -> impl Iterator<Item = &MonsterState> {
        self.monsters
            .iter()
            .filter(|monster| monster.visible && monster.is_alive())
    }

    /// The living monster standing on `position`, if any.
    pub fn live_monster_at(&self, position: Position) -> Option<&MonsterState> {
        self.monsters
            .iter()
            .find(|monster| monster.is_alive() && monster.position == position)
    }

    /// The accepted room containing `position`, if any.
    pub fn room_containing(&self, position: Position) -> Option<&Room> {
        self.rooms.iter().find(|room| room.contains(position))
    }
}

/// Computes a deterministic digest of the full state.
///
/// SHA-256 over the bincode encoding. Two runs with the same seed and the
/// same input sequence produce identical digests, which is the property
/// replay tests assert.
#[cfg(feature = "serde")]
pub fn state_digest(state: &GameState) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    // bincode serialization is deterministic and consistent.
    if let Ok(bytes) = bincode::serialize(state) {
        hasher.update(&bytes);
    }
    hasher.finalize().into()
}
