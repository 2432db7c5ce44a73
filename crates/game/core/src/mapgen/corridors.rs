use crate::rng::Pcg32;
use crate::state::{Position, Room, TileGrid, TileKind};

/// Connects each consecutive pair of accepted rooms with an L-shaped corridor
/// between their centers.
///
/// Orientation is a fair coin per pair: horizontal along the first room's
/// center row then vertical along the second room's center column, or the
/// reverse. Every room ends up reachable from the first; loops and overlaps
/// with earlier corridors are allowed.
pub(super) fn carve_corridors(grid: &mut TileGrid, rooms: &[Room], rng: &mut Pcg32) {
    for pair in rooms.windows(2) {
        let from = pair[0].center();
        let to = pair[1].center();

        if rng.coin() {
            carve_horizontal(grid, from.x, to.x, from.y);
            carve_vertical(grid, from.y, to.y, to.x);
        } else {
            carve_vertical(grid, from.y, to.y, from.x);
            carve_horizontal(grid, from.x, to.x, to.y);
        }
    }
}

fn carve_horizontal(grid: &mut TileGrid, x0: i32, x1: i32, y: i32) {
    for x in x0.min(x1)..=x0.max(x1) {
        grid.set_kind(Position::new(x, y), TileKind::Floor);
    }
}

fn carve_vertical(grid: &mut TileGrid, y0: i32, y1: i32, x: i32) {
    for y in y0.min(y1)..=y0.max(y1) {
        grid.set_kind(Position::new(x, y), TileKind::Floor);
    }
}
