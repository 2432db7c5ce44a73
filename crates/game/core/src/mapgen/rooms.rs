use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::rng::Pcg32;
use crate::state::{Position, Room, TileGrid, TileKind};

/// Attempts room placement exactly [`GameConfig::ROOM_ATTEMPTS`] times.
///
/// Each attempt draws an extent in
/// `[ROOM_MIN_EXTENT, ROOM_MAX_EXTENT]` and a top-left corner that keeps a
/// 1-cell wall margin on every side. A candidate that overlaps (or touches)
/// any accepted room is rejected; accepted rooms are carved to floor and kept
/// in acceptance order, which later defines corridor connectivity and spawn
/// order.
pub(super) fn place_rooms(
    grid: &mut TileGrid,
    rng: &mut Pcg32,
) -> ArrayVec<Room, { GameConfig::MAX_ROOMS }> {
    let mut rooms: ArrayVec<Room, { GameConfig::MAX_ROOMS }> = ArrayVec::new();

    for _ in 0..GameConfig::ROOM_ATTEMPTS {
        let width = rng.range_u32(GameConfig::ROOM_MIN_EXTENT, GameConfig::ROOM_MAX_EXTENT);
        let height = rng.range_u32(GameConfig::ROOM_MIN_EXTENT, GameConfig::ROOM_MAX_EXTENT);

        // Top-left range that keeps the 1-cell border margin.
        let max_x = grid.width() as i32 - width as i32 - 1;
        let max_y = grid.height() as i32 - height as i32 - 1;
        if max_x < 1 || max_y < 1 {
            continue;
        }

        let candidate = Room::new(rng.range_i32(1, max_x), rng.range_i32(1, max_y), width, height);
        if rooms.iter().any(|room| room.intersects(&candidate)) {
            continue;
        }

        carve(grid, &candidate);
        rooms.push(candidate);
    }

    rooms
}

fn carve(grid: &mut TileGrid, room: &Room) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            grid.set_kind(Position::new(x, y), TileKind::Floor);
        }
    }
}
