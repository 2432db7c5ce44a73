//! Turn engine driving the dungeon crawl.
//!
//! [`step`] is the sole mutator of [`GameState`] and the reducer the runtime
//! calls once per directional input. A turn runs to completion before
//! returning: the player acts, consequences resolve (combat, a floor
//! transition, the monster pass), and visibility is refreshed. Every input
//! either advances the state deterministically or is a no-op; nothing here
//! fails.

mod outcome;

pub use outcome::StepOutcome;

use crate::ai;
use crate::combat::{self, FightOutcome, FightReport};
use crate::state::{GamePhase, GameState, MonsterId, TileKind};
use crate::visibility;

/// One of the eight movement directions accepted per turn.
///
/// `ALL` lists the fixed evaluation order used whenever candidates are
/// scanned (monster chase steps): row by row, top to bottom, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Grid offset for this direction; `y` grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Advances the game by one player turn.
///
/// Terminal states swallow input, and walking into a wall or off the map
/// changes nothing. Otherwise the turn commits: stepping onto a spotted
/// living monster resolves melee, stepping onto stairs rebuilds the next
/// floor, and a plain move hands the monsters their decision pass.
pub fn step(state: &mut GameState, direction: Direction) -> StepOutcome {
    if state.phase.is_terminal() {
        return StepOutcome::Ignored;
    }

    let (dx, dy) = direction.delta();
    let destination = state.player_position.offset(dx, dy);
    if !state.grid.is_walkable(destination) {
        return StepOutcome::Blocked;
    }

    // The input consumes a turn from here on.
    state.nonce += 1;

    let mut fought: Option<(MonsterId, FightReport)> = None;
    if let Some(monster) = state
        .monsters
        .iter_mut()
        .find(|monster| monster.is_alive() && monster.visible && monster.position == destination)
    {
        let target = monster.id;
        let report = combat::fight(&mut state.player, monster, &mut state.log);
        fought = Some((target, report));
    }

    if let Some((target, report)) = fought {
        match report.outcome {
            // Melee death ends the turn at once; the other monsters do not
            // get a pass.
            FightOutcome::PlayerSlain => {
                state.phase = GamePhase::GameOver;
            }
            // The player claims the vacated cell, the survivors respond,
            // then visibility catches up with the new position.
            FightOutcome::MonsterSlain => {
                state.player_position = destination;
                ai::monster_pass(state);
                refresh_visibility(state);
            }
            FightOutcome::BothAlive => {}
        }
        return StepOutcome::Fought {
            target,
            defeated: report.outcome == FightOutcome::MonsterSlain,
            player_died: report.outcome == FightOutcome::PlayerSlain,
            leveled_up: report.leveled_up,
        };
    }

    state.player_position = destination;
    refresh_visibility(state);

    if state.grid.kind(destination) == Some(TileKind::Stairs) {
        state.advance_floor();
        return StepOutcome::Descended { floor: state.floor };
    }

    ai::monster_pass(state);
    StepOutcome::Moved
}

/// Reveals terrain around the player: the whole room with its border when
/// standing inside one, otherwise the surrounding 3x3 patch.
fn refresh_visibility(state: &mut GameState) {
    match state.room_containing(state.player_position).copied() {
        Some(room) => visibility::reveal_room(&mut state.grid, &room, &mut state.monsters),
        None => visibility::reveal_around(&mut state.grid, state.player_position),
    }
}
