//! Procedural floor generation.
//!
//! A floor starts as solid wall. Room placement, corridor carving, and
//! monster spawning each draw from their own seeded stream, so a floor is a
//! pure function of `(game seed, floor number, map dimensions)`. Generation
//! never fails; the worst case is a floor with few or zero rooms, which the
//! caller tolerates via [`FALLBACK_POSITION`].
mod corridors;
mod rooms;
mod spawn;

pub use spawn::spawn_monsters;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::rng::{CONTEXT_CORRIDORS, CONTEXT_ROOMS, Pcg32, event_seed};
use crate::state::{Position, Room, TileGrid, TileKind};

/// Player position on floors where no room was accepted. Generation forces
/// this cell to floor terrain so the player always stands on walkable ground.
pub const FALLBACK_POSITION: Position = Position { x: 1, y: 1 };

/// Builds the terrain and room list for one floor.
pub fn generate(
    config: &GameConfig,
    game_seed: u64,
    floor: u32,
) -> (TileGrid, ArrayVec<Room, { GameConfig::MAX_ROOMS }>) {
    let mut grid = TileGrid::new(config.map_width, config.map_height);

    let mut room_rng = Pcg32::new(event_seed(game_seed, floor, 0, CONTEXT_ROOMS));
    let rooms = rooms::place_rooms(&mut grid, &mut room_rng);

    let mut corridor_rng = Pcg32::new(event_seed(game_seed, floor, 0, CONTEXT_CORRIDORS));
    corridors::carve_corridors(&mut grid, &rooms, &mut corridor_rng);

    match rooms.last() {
        Some(last) => grid.set_kind(last.center(), TileKind::Stairs),
        None => grid.set_kind(FALLBACK_POSITION, TileKind::Floor),
    }

    (grid, rooms)
}
