//! Deterministic dungeon-crawl rules shared across embedders.
//!
//! `delve-core` owns the canonical simulation: floor generation, fog of war,
//! combat, the monster pass, and the turn engine. Everything is a pure
//! function of a [`GameState`] and a seed, so the runtime and offline tools
//! replay identical games from identical inputs. All state mutation flows
//! through [`engine::step`], and supporting crates depend on the types
//! re-exported here.

pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod mapgen;
pub mod rng;
pub mod state;
pub mod visibility;

pub use ai::monster_pass;
pub use combat::{FightOutcome, FightReport, exp_for_next_level, fight, resolve_damage};
pub use config::GameConfig;
pub use engine::{Direction, StepOutcome, step};
pub use rng::Pcg32;
pub use state::{
    BattleLog, GamePhase, GameState, Liveness, LogEntry, Meter, MonsterId, MonsterKind,
    MonsterProfile, MonsterState, PlayerStatus, Position, Room, Tile, TileGrid, TileKind,
};

#[cfg(feature = "serde")]
pub use state::state_digest;
