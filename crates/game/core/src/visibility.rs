//! Fog-of-war reveals.
//!
//! Both operations only ever set flags, never clear them, so visibility is
//! monotonic within a floor: a revealed tile stays revealed and a spotted
//! monster stays spotted until the floor is rebuilt.

use bounded_vector::BoundedVec;

use crate::config::GameConfig;
use crate::state::{MonsterState, Position, Room, TileGrid};

/// Reveals a whole room plus a 1-cell border around it (clamped to the grid),
/// and spots every monster standing inside the room rectangle.
pub fn reveal_room(
    grid: &mut TileGrid,
    room: &Room,
    monsters: &mut BoundedVec<MonsterState, 0, { GameConfig::MAX_MONSTERS }>,
) {
    for y in (room.y - 1)..=(room.bottom() + 1) {
        for x in (room.x - 1)..=(room.right() + 1) {
            grid.reveal(Position::new(x, y));
        }
    }

    for monster in monsters.iter_mut() {
        if room.contains(monster.position) {
            monster.visible = true;
        }
    }
}

/// Reveals the 3x3 block centered on `position` (clamped to the grid).
/// Corridor walking uses this; monster visibility is untouched.
pub fn reveal_around(grid: &mut TileGrid, position: Position) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            grid.reveal(position.offset(dx, dy));
        }
    }
}
